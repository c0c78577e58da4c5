//! Field resolvers for movies and directors
//!
//! Scalar fields read straight from the record. The relationship fields go
//! back to the catalog: a movie's `director` is looked up by its
//! `directorId`, a director's `movies` by filtering on that same field.

use super::{catalog, to_gql_error};
use crate::api::graphql::types::*;
use async_graphql::{Context, ID, Object, Result as GQLResult};

#[Object]
impl Movie {
    /// Movie ID
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// Title
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Genre
    async fn genre(&self) -> &str {
        &self.0.genre
    }

    /// Director of the movie; null when unset or when the reference is dangling
    async fn director(&self, ctx: &Context<'_>) -> GQLResult<Option<Director>> {
        let director = catalog(ctx)?
            .director_of(&self.0)
            .await
            .map_err(to_gql_error)?;
        Ok(director.map(Director::from))
    }
}

#[Object]
impl Director {
    /// Director ID
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// Full name
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Age in years
    async fn age(&self) -> i32 {
        self.0.age
    }

    /// Movies whose `directorId` is this director
    async fn movies(&self, ctx: &Context<'_>) -> GQLResult<Vec<Movie>> {
        let movies = catalog(ctx)?
            .movies_by(&self.0)
            .await
            .map_err(to_gql_error)?;
        Ok(wrap_all(movies))
    }
}
