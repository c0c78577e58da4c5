//! Catalog entities
//!
//! Movies and directors as they are persisted in the document store. Field
//! names are camelCase on the wire so a stored movie reads
//! `{"id": .., "name": .., "genre": .., "directorId": ..}`.

use crate::store::Collection;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Allocate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| Error::invalid_argument(format!("malformed id: {s:?}")))
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A persisted record type bound to its collection
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection the records live in
    const COLLECTION: Collection;

    /// Record identifier
    fn id(&self) -> &EntityId;
}

/// Movie record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Movie ID
    pub id: EntityId,
    /// Title
    pub name: String,
    /// Genre label, free text
    pub genre: String,
    /// Director reference; not checked against the directors collection
    #[serde(default)]
    pub director_id: Option<EntityId>,
}

impl Entity for Movie {
    const COLLECTION: Collection = Collection::Movies;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Director record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    /// Director ID
    pub id: EntityId,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: i32,
}

impl Entity for Director {
    const COLLECTION: Collection = Collection::Directors;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Input for creating a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    /// Title
    pub name: String,
    /// Genre label
    pub genre: String,
    /// Director reference
    pub director_id: Option<EntityId>,
}

/// Input for creating a director
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDirector {
    /// Full name
    pub name: String,
    /// Age in years
    pub age: i32,
}
