//! Root query type

use super::{catalog, parse_id, to_gql_error};
use crate::api::graphql::types::*;
use async_graphql::{Context, ID, Object, Result as GQLResult};

/// Root query type for GraphQL
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a movie by ID
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> GQLResult<Option<Movie>> {
        let id = parse_id(&id)?;
        let movie = catalog(ctx)?.movie(&id).await.map_err(to_gql_error)?;
        Ok(movie.map(Movie::from))
    }

    /// Get a director by ID
    async fn director(&self, ctx: &Context<'_>, id: ID) -> GQLResult<Option<Director>> {
        let id = parse_id(&id)?;
        let director = catalog(ctx)?.director(&id).await.map_err(to_gql_error)?;
        Ok(director.map(Director::from))
    }

    /// All movies
    async fn movies(&self, ctx: &Context<'_>) -> GQLResult<Vec<Movie>> {
        let movies = catalog(ctx)?.movies().await.map_err(to_gql_error)?;
        Ok(wrap_all(movies))
    }

    /// All directors
    async fn directors(&self, ctx: &Context<'_>) -> GQLResult<Vec<Director>> {
        let directors = catalog(ctx)?.directors().await.map_err(to_gql_error)?;
        Ok(wrap_all(directors))
    }
}
