//! GraphQL type definitions
//!
//! `Movie` and `Director` refer to each other. async-graphql registers
//! object types by name while the schema is built, so the cycle needs no
//! forward declarations; the field resolvers live in `resolver.rs`.

use cinegraph_core::model;

/// GraphQL movie type
#[derive(Debug, Clone)]
pub struct Movie(pub model::Movie);

/// GraphQL director type
#[derive(Debug, Clone)]
pub struct Director(pub model::Director);

impl From<model::Movie> for Movie {
    fn from(movie: model::Movie) -> Self {
        Self(movie)
    }
}

impl From<model::Director> for Director {
    fn from(director: model::Director) -> Self {
        Self(director)
    }
}

/// Wrap a list of core records into their GraphQL types
pub(crate) fn wrap_all<T, G: From<T>>(records: Vec<T>) -> Vec<G> {
    records.into_iter().map(G::from).collect()
}
