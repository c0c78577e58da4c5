//! Cinegraph Server - GraphQL API for the movie catalog
//!
//! Provides HTTP endpoints for:
//! - POST /graphql - Execute GraphQL queries and mutations
//! - GET /graphql - GraphQL Playground (when enabled)
//! - GET /health - Service and store health

use cinegraph_core::Catalog;
use std::sync::Arc;
use std::time::Instant;

pub mod api;
pub mod config;

/// Cinegraph server state
///
/// Built once at startup and shared by every request through an `Arc`.
#[derive(Clone)]
pub struct CinegraphServer {
    /// Catalog over the process-wide store handle
    pub catalog: Catalog,
    /// Moment the server state was created
    pub started_at: Instant,
}

impl CinegraphServer {
    /// Create a new server instance around an opened catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            started_at: Instant::now(),
        }
    }

    /// Shared handle for schema data and router state
    pub fn shared(catalog: Catalog) -> Arc<Self> {
        Arc::new(Self::new(catalog))
    }
}
