//! Catalog - typed reads and writes over the document store
//!
//! The catalog is the handle every resolver receives. It turns drafts into
//! documents on the way in and documents back into [`Movie`] / [`Director`]
//! records on the way out, and implements the two relationship lookups:
//!
//! - movie → director: by the movie's `directorId`, absent when the
//!   reference is null or dangling
//! - director → movies: every movie whose `directorId` is the director's id
//!
//! Writes are single-document inserts. Nothing here checks that a movie's
//! director exists.

use crate::model::{Director, Entity, EntityId, Movie, NewDirector, NewMovie};
use crate::store::{Document, DocumentStore, Filter};
use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Document field holding a movie's director reference
const DIRECTOR_ID_FIELD: &str = "directorId";

/// Movie/director catalog over a shared store handle
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn DocumentStore>,
}

impl Catalog {
    /// Wrap an opened store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Backend name of the underlying store
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Create a director
    pub async fn add_director(&self, draft: NewDirector) -> Result<Director> {
        let director: Director = self.insert(&draft).await?;
        info!(id = %director.id, name = %director.name, "director added");
        Ok(director)
    }

    /// Create a movie
    ///
    /// `director_id` is stored as given, even if no such director exists.
    pub async fn add_movie(&self, draft: NewMovie) -> Result<Movie> {
        let movie: Movie = self.insert(&draft).await?;
        info!(
            id = %movie.id,
            name = %movie.name,
            director_id = ?movie.director_id,
            "movie added"
        );
        Ok(movie)
    }

    /// Movie by id
    pub async fn movie(&self, id: &EntityId) -> Result<Option<Movie>> {
        debug!(%id, "fetching movie");
        self.get(id).await
    }

    /// Director by id
    pub async fn director(&self, id: &EntityId) -> Result<Option<Director>> {
        debug!(%id, "fetching director");
        self.get(id).await
    }

    /// All movies
    pub async fn movies(&self) -> Result<Vec<Movie>> {
        self.list(&Filter::All).await
    }

    /// All directors
    pub async fn directors(&self) -> Result<Vec<Director>> {
        self.list(&Filter::All).await
    }

    /// Director a movie refers to
    pub async fn director_of(&self, movie: &Movie) -> Result<Option<Director>> {
        let Some(director_id) = movie.director_id else {
            return Ok(None);
        };

        let director = self.director(&director_id).await?;
        if director.is_none() {
            warn!(movie = %movie.id, %director_id, "movie refers to a missing director");
        }
        Ok(director)
    }

    /// Movies directed by `director`
    pub async fn movies_by(&self, director: &Director) -> Result<Vec<Movie>> {
        let filter = Filter::eq(DIRECTOR_ID_FIELD, director.id.to_string());
        self.list(&filter).await
    }

    /// Probe the store
    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }

    /// Flush the store; called once at shutdown
    pub async fn flush(&self) -> Result<()> {
        self.store.flush().await
    }

    async fn insert<D, E>(&self, draft: &D) -> Result<E>
    where
        D: Serialize,
        E: Entity,
    {
        let stored = self.store.insert(E::COLLECTION, encode(draft)?).await?;
        decode(stored)
    }

    async fn get<E: Entity>(&self, id: &EntityId) -> Result<Option<E>> {
        self.store
            .find_by_id(E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    async fn list<E: Entity>(&self, filter: &Filter) -> Result<Vec<E>> {
        let documents = self.store.find_where(E::COLLECTION, filter).await?;
        debug!(
            collection = %E::COLLECTION,
            count = documents.len(),
            "listed documents"
        );
        documents.into_iter().map(decode).collect()
    }
}

fn encode<T: Serialize>(draft: &T) -> Result<Document> {
    match serde_json::to_value(draft)? {
        Value::Object(document) => Ok(document),
        _ => Err(Error::internal("draft did not serialize to a document")),
    }
}

fn decode<T: DeserializeOwned>(document: Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
