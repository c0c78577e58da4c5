//! LMDB-backed document store
//!
//! One named database per collection. Keys are identifier strings, values
//! are JSON-encoded documents. LMDB calls block, so every operation runs on
//! the blocking thread pool.

use super::{Collection, Document, DocumentStore, Filter, ID_FIELD};
use crate::model::EntityId;
use crate::{Error, Result};
use async_trait::async_trait;
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

type DocumentDb = Database<Str, Bytes>;

struct Inner {
    env: Env,
    movies: DocumentDb,
    directors: DocumentDb,
}

impl Inner {
    fn db(&self, collection: Collection) -> DocumentDb {
        match collection {
            Collection::Movies => self.movies,
            Collection::Directors => self.directors,
        }
    }
}

/// Durable document store on an LMDB environment
#[derive(Clone)]
pub struct LmdbStore {
    inner: Arc<Inner>,
}

impl LmdbStore {
    /// Open (or create) the environment at `path`
    pub fn open(path: impl AsRef<Path>, map_size: usize) -> Result<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)?;

        // SAFETY: the environment directory is owned by this process; nothing
        // else maps it while the store is open.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(Collection::ALL.len() as u32)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let movies: DocumentDb =
            env.create_database(&mut wtxn, Some(Collection::Movies.as_str()))?;
        let directors: DocumentDb =
            env.create_database(&mut wtxn, Some(Collection::Directors.as_str()))?;
        wtxn.commit()?;

        Ok(Self {
            inner: Arc::new(Inner {
                env,
                movies,
                directors,
            }),
        })
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Inner) -> Result<T> + Send + 'static,
    {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || op(&inner)).await?
    }
}

fn decode(bytes: &[u8]) -> Result<Document> {
    match serde_json::from_slice(bytes)? {
        Value::Object(document) => Ok(document),
        other => Err(Error::storage(format!(
            "stored value is not a document: {other}"
        ))),
    }
}

#[async_trait]
impl DocumentStore for LmdbStore {
    async fn insert(&self, collection: Collection, mut document: Document) -> Result<Document> {
        let id = EntityId::new().to_string();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        let bytes = serde_json::to_vec(&document)?;

        self.blocking(move |inner| {
            let mut wtxn = inner.env.write_txn()?;
            inner.db(collection).put(&mut wtxn, &id, &bytes)?;
            wtxn.commit()?;
            Ok(())
        })
        .await?;

        Ok(document)
    }

    async fn find_by_id(&self, collection: Collection, id: &EntityId) -> Result<Option<Document>> {
        let key = id.to_string();
        self.blocking(move |inner| {
            let rtxn = inner.env.read_txn()?;
            inner
                .db(collection)
                .get(&rtxn, &key)?
                .map(decode)
                .transpose()
        })
        .await
    }

    async fn find_where(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>> {
        let filter = filter.clone();
        self.blocking(move |inner| {
            let rtxn = inner.env.read_txn()?;
            let mut matched = Vec::new();
            for entry in inner.db(collection).iter(&rtxn)? {
                let (_, bytes) = entry?;
                let document = decode(bytes)?;
                if filter.matches(&document) {
                    matched.push(document);
                }
            }
            Ok(matched)
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        self.blocking(|inner| {
            inner.env.read_txn()?;
            Ok(())
        })
        .await
    }

    async fn flush(&self) -> Result<()> {
        self.blocking(|inner| Ok(inner.env.force_sync()?)).await
    }

    fn backend(&self) -> &'static str {
        "lmdb"
    }
}
