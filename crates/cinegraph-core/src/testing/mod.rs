//! Testing infrastructure for Cinegraph Core
//!
//! Helpers shared by unit tests and by downstream crates' integration tests
//! (enable the `testing` feature).
//!
//! ```rust,ignore
//! use cinegraph_core::testing::memory_catalog;
//!
//! # async fn demo() -> cinegraph_core::Result<()> {
//! let catalog = memory_catalog();
//! assert!(catalog.movies().await?.is_empty());
//! # Ok(())
//! # }
//! ```

mod context;

pub use context::TestContext;

use crate::catalog::Catalog;
use crate::model::EntityId;
use crate::store::{Collection, Document, DocumentStore, Filter, LmdbStore, MemoryStore};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// LMDB map size used by test stores (16 MiB)
pub const TEST_MAP_SIZE: usize = 16 * 1024 * 1024;

/// Catalog over a fresh in-memory store
pub fn memory_catalog() -> Catalog {
    Catalog::new(Arc::new(MemoryStore::new()))
}

/// Catalog over a fresh LMDB store rooted in `ctx`
pub fn lmdb_catalog(ctx: &TestContext) -> Result<Catalog> {
    Ok(Catalog::new(Arc::new(LmdbStore::open(
        ctx.path(),
        TEST_MAP_SIZE,
    )?)))
}

/// Catalog whose store rejects every operation
pub fn unavailable_catalog() -> Catalog {
    Catalog::new(Arc::new(UnavailableStore))
}

/// Store that behaves like an unreachable database
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn refuse<T>(&self, collection: Collection) -> Result<T> {
        Err(Error::storage(format!(
            "connection refused while accessing {collection}"
        )))
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert(&self, collection: Collection, _document: Document) -> Result<Document> {
        self.refuse(collection)
    }

    async fn find_by_id(&self, collection: Collection, _id: &EntityId) -> Result<Option<Document>> {
        self.refuse(collection)
    }

    async fn find_where(&self, collection: Collection, _filter: &Filter) -> Result<Vec<Document>> {
        self.refuse(collection)
    }

    async fn ping(&self) -> Result<()> {
        Err(Error::storage("connection refused"))
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}
