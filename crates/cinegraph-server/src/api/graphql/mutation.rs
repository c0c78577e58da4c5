//! GraphQL mutations for adding movies and directors

use super::{catalog, parse_id, to_gql_error};
use crate::api::graphql::types::*;
use async_graphql::{Context, ID, Object, Result as GQLResult};
use cinegraph_core::{NewDirector, NewMovie};

/// Root mutation type for GraphQL
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new director
    ///
    /// Every call creates a new record, even for repeated arguments.
    async fn add_director(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> GQLResult<Director> {
        let director = catalog(ctx)?
            .add_director(NewDirector { name, age })
            .await
            .map_err(to_gql_error)?;
        Ok(Director::from(director))
    }

    /// Create a new movie
    ///
    /// `directorId` is stored without checking that the director exists.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        director_id: Option<ID>,
    ) -> GQLResult<Movie> {
        let director_id = director_id.as_ref().map(parse_id).transpose()?;
        let movie = catalog(ctx)?
            .add_movie(NewMovie {
                name,
                genre,
                director_id,
            })
            .await
            .map_err(to_gql_error)?;
        Ok(Movie::from(movie))
    }
}
