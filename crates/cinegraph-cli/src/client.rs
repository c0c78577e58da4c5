use crate::queries::*;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Default server URL
pub const DEFAULT_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("{}", format_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    #[error("response carried no data")]
    MissingData,
}

fn format_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| match e.code() {
            Some(code) => format!("{} [{}]", e.message, code),
            None => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

impl<T> GraphQLResponse<T> {
    /// Any error in the envelope fails the whole call
    pub fn into_result(self) -> Result<T, ClientError> {
        if !self.errors.is_empty() {
            return Err(ClientError::GraphQL(self.errors));
        }
        self.data.ok_or(ClientError::MissingData)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub name: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSummary {
    pub id: String,
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub director: Option<DirectorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorDetail {
    pub id: String,
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedMovie {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct MoviesData {
    movies: Vec<MovieSummary>,
}

#[derive(Deserialize)]
struct DirectorsData {
    directors: Vec<DirectorSummary>,
}

#[derive(Debug, Deserialize)]
struct MovieData {
    movie: Option<MovieDetail>,
}

#[derive(Deserialize)]
struct DirectorData {
    director: Option<DirectorDetail>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMovieData {
    add_movie: AddedMovie,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddDirectorData {
    add_director: DirectorSummary,
}

pub struct CinegraphClient {
    client: Client,
    base_url: String,
}

impl CinegraphClient {
    pub fn new(url: Option<&str>) -> Self {
        let base_url = url.unwrap_or(DEFAULT_URL).trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// POST a document and unwrap the response envelope
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json::<GraphQLResponse<T>>().await?.into_result()
    }

    pub async fn movies(&self) -> Result<Vec<MovieSummary>, ClientError> {
        let data: MoviesData = self.execute(GET_MOVIES_QUERY, None).await?;
        Ok(data.movies)
    }

    pub async fn directors(&self) -> Result<Vec<DirectorSummary>, ClientError> {
        let data: DirectorsData = self.execute(GET_DIRECTORS_QUERY, None).await?;
        Ok(data.directors)
    }

    pub async fn movie(&self, id: &str) -> Result<Option<MovieDetail>, ClientError> {
        let data: MovieData = self
            .execute(GET_MOVIE_QUERY, Some(json!({ "id": id })))
            .await?;
        Ok(data.movie)
    }

    pub async fn director(&self, id: &str) -> Result<Option<DirectorDetail>, ClientError> {
        let data: DirectorData = self
            .execute(GET_DIRECTOR_QUERY, Some(json!({ "id": id })))
            .await?;
        Ok(data.director)
    }

    pub async fn add_director(&self, name: &str, age: i32) -> Result<DirectorSummary, ClientError> {
        let data: AddDirectorData = self
            .execute(
                ADD_DIRECTOR_MUTATION,
                Some(json!({ "name": name, "age": age })),
            )
            .await?;
        Ok(data.add_director)
    }

    pub async fn add_movie(
        &self,
        name: &str,
        genre: &str,
        director_id: &str,
    ) -> Result<AddedMovie, ClientError> {
        let data: AddMovieData = self
            .execute(
                ADD_MOVIE_MUTATION,
                Some(json!({ "name": name, "genre": genre, "directorId": director_id })),
            )
            .await?;
        Ok(data.add_movie)
    }
}
