//! GraphQL API module
//!
//! Exposes the movie catalog as a GraphQL schema: `Movie` and `Director`
//! object types, four root queries and two mutations. Resolvers reach the
//! store through the [`Catalog`] carried by the server state attached as
//! schema data.

mod codes;
mod mutation;
mod resolver;
mod schema;
mod types;

pub use codes::ErrorCodes;
pub use mutation::*;
pub use schema::*;
pub use types::*;

use crate::CinegraphServer;
use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, Result as GQLResult, Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::IntoResponse};
use cinegraph_core::{Catalog, EntityId};
use std::sync::Arc;

/// GraphQL schema type
pub type CinegraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create a new GraphQL schema from the Cinegraph server
pub fn create_schema(server: Arc<CinegraphServer>) -> CinegraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(ErrorCodes)
        .data(server)
        .finish()
}

/// Schema definition language for the API, without a live store
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// GraphQL query handler
pub async fn graphql_handler(
    State(schema): State<CinegraphSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL playground handler (for development)
pub async fn graphql_playground() -> impl IntoResponse {
    use axum::response::Html;
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

/// Catalog handle from the request context
pub(crate) fn catalog<'a>(ctx: &Context<'a>) -> GQLResult<&'a Catalog> {
    Ok(&ctx.data::<Arc<CinegraphServer>>()?.catalog)
}

/// Parse a GraphQL `ID` argument into a store identifier
pub(crate) fn parse_id(id: &ID) -> GQLResult<EntityId> {
    id.parse::<EntityId>().map_err(to_gql_error)
}

/// Convert a core error into a GraphQL error carrying `extensions.code`
pub fn to_gql_error(err: cinegraph_core::Error) -> async_graphql::Error {
    if err.is_storage() {
        tracing::error!("Store operation failed: {}", err);
    }
    let code = err.code();
    async_graphql::Error::new(err.to_string())
        .extend_with(|_, ext| ext.set("code", code.to_string()))
}
