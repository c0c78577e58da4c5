//! In-process document store

use super::{Collection, Document, DocumentStore, Filter, ID_FIELD};
use crate::Result;
use crate::model::EntityId;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Default)]
struct Table {
    /// Documents in insertion order
    rows: Vec<Document>,
    /// ID -> position in `rows`
    by_id: HashMap<EntityId, usize>,
}

/// Memory-backed document store
///
/// Listing returns documents in insertion order. Contents are lost when the
/// process exits.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Collection, Table>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: Collection) -> usize {
        self.tables
            .read()
            .get(&collection)
            .map_or(0, |table| table.rows.len())
    }

    /// Whether a collection holds no documents
    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: Collection, mut document: Document) -> Result<Document> {
        let id = EntityId::new();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        let mut tables = self.tables.write();
        let table = tables.entry(collection).or_default();
        table.by_id.insert(id, table.rows.len());
        table.rows.push(document.clone());

        Ok(document)
    }

    async fn find_by_id(&self, collection: Collection, id: &EntityId) -> Result<Option<Document>> {
        let tables = self.tables.read();
        Ok(tables.get(&collection).and_then(|table| {
            table
                .by_id
                .get(id)
                .and_then(|&pos| table.rows.get(pos))
                .cloned()
        }))
    }

    async fn find_where(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>> {
        let tables = self.tables.read();
        Ok(tables
            .get(&collection)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
