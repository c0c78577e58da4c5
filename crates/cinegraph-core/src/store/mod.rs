//! Entity store - generic document collections
//!
//! The store knows nothing about movies or directors. It keeps JSON documents
//! in named collections, assigns identifiers on insert and answers two kinds
//! of lookup:
//!
//! - by identifier (`find_by_id`), absent when nothing matches
//! - by field equality (`find_where`), possibly empty
//!
//! Two backends ship with the crate: [`MemoryStore`] for tests and throwaway
//! servers, and [`LmdbStore`] for durable data.

mod lmdb;
mod memory;

pub use lmdb::LmdbStore;
pub use memory::MemoryStore;

use crate::model::EntityId;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Key under which the store keeps a document's identifier
pub const ID_FIELD: &str = "id";

/// A stored record: a JSON object
pub type Document = serde_json::Map<String, Value>;

/// Named document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Movie records
    Movies,
    /// Director records
    Directors,
}

impl Collection {
    /// All collections, in a stable order
    pub const ALL: [Collection; 2] = [Collection::Movies, Collection::Directors];

    /// Stable collection name
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Movies => "movies",
            Collection::Directors => "directors",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate over documents
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Every document in the collection
    All,
    /// Documents whose `field` equals `value`
    Eq {
        /// Top-level field name
        field: String,
        /// Value to compare against
        value: Value,
    },
}

impl Filter {
    /// Field equality predicate
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Test a document against the predicate
    ///
    /// A missing field never matches, not even against `null`.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => document.get(field) == Some(value),
        }
    }
}

/// Read the identifier the store assigned to a document
pub fn document_id(document: &Document) -> Option<EntityId> {
    document.get(ID_FIELD)?.as_str()?.parse().ok()
}

/// Document collection backend
///
/// Implementations must be safe to share across request tasks; consistency
/// between concurrent requests is whatever the backend itself guarantees.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new document and return it with its assigned `id`
    ///
    /// Any `id` already present in `document` is replaced.
    async fn insert(&self, collection: Collection, document: Document) -> Result<Document>;

    /// Look up a document by identifier
    async fn find_by_id(&self, collection: Collection, id: &EntityId) -> Result<Option<Document>>;

    /// All documents matching `filter`
    async fn find_where(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>>;

    /// Liveness probe
    async fn ping(&self) -> Result<()>;

    /// Durably persist pending writes
    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Backend name for logs and health output
    fn backend(&self) -> &'static str;
}

/// Default LMDB map size (1 GiB)
pub const DEFAULT_MAP_SIZE: usize = 1 << 30;

/// Store selection parsed from a connection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// In-process memory store (`memory://`)
    Memory,
    /// LMDB environment directory (`lmdb://<path>[?map_size=<bytes>]`)
    Lmdb {
        /// Environment directory
        path: PathBuf,
        /// LMDB map size in bytes
        map_size: usize,
    },
}

impl StoreConfig {
    /// Parse a store connection string
    ///
    /// ```
    /// use cinegraph_core::store::StoreConfig;
    ///
    /// assert_eq!(StoreConfig::parse("memory://").unwrap(), StoreConfig::Memory);
    /// assert!(matches!(
    ///     StoreConfig::parse("lmdb://./data/catalog").unwrap(),
    ///     StoreConfig::Lmdb { .. }
    /// ));
    /// ```
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if let Some(rest) = url.strip_prefix("memory://") {
            if !rest.is_empty() {
                return Err(Error::invalid_argument(format!(
                    "memory store takes no path: {url:?}"
                )));
            }
            return Ok(StoreConfig::Memory);
        }

        let Some(rest) = url.strip_prefix("lmdb://") else {
            return Err(Error::invalid_argument(format!(
                "unsupported store url: {url:?} (expected memory:// or lmdb://<path>)"
            )));
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        if path.is_empty() {
            return Err(Error::invalid_argument("lmdb store url has no path"));
        }

        let mut map_size = DEFAULT_MAP_SIZE;
        for pair in query.into_iter().flat_map(|q| q.split('&')) {
            match pair.split_once('=') {
                Some(("map_size", value)) => {
                    map_size = value.parse().map_err(|_| {
                        Error::invalid_argument(format!("invalid map_size: {value:?}"))
                    })?;
                }
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "unknown store option: {pair:?}"
                    )));
                }
            }
        }

        Ok(StoreConfig::Lmdb {
            path: PathBuf::from(path),
            map_size,
        })
    }
}

/// Open the store described by `config`
///
/// Called once at startup; the returned handle is shared by every request.
pub fn open(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>> {
    match config {
        StoreConfig::Memory => {
            tracing::info!("Opening in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreConfig::Lmdb { path, map_size } => {
            tracing::info!("Opening LMDB document store at {:?}", path);
            Ok(Arc::new(LmdbStore::open(path, *map_size)?))
        }
    }
}
