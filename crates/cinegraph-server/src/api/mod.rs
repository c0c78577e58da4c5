//! API handlers

pub mod graphql;
pub mod health;

use crate::CinegraphServer;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Build the HTTP router
///
/// The GraphQL endpoint and the health check carry different state (the
/// schema and the raw server handle), so each gets its own sub-router.
pub fn router(server: Arc<CinegraphServer>, playground: bool) -> Router {
    let schema = graphql::create_schema(server.clone());

    let mut graphql_route = post(graphql::graphql_handler);
    if playground {
        graphql_route = graphql_route.get(graphql::graphql_playground);
    }

    let graphql = Router::new()
        .route("/graphql", graphql_route)
        .with_state(schema);

    let health = Router::new()
        .route("/health", get(health::health_check))
        .with_state(server);

    graphql.merge(health).layer(
        ServiceBuilder::new()
            // Request/response tracing
            .layer(TraceLayer::new_for_http())
            // The browser form is served from another origin
            .layer(CorsLayer::permissive())
            // Compression for responses (gzip, br)
            .layer(CompressionLayer::new()),
    )
}
