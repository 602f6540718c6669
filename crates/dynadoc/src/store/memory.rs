//! In-memory store backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dynadoc_core::{RepositoryError, Result};
use tokio::sync::RwLock;

use super::{Item, StoreClient};

/// In-memory store backend for testing.
///
/// Items live in a list behind `Arc<RwLock<_>>`; nothing is persisted.
/// The store is told its key attribute names at construction so it can
/// extract the primary key from a put item, the same way a real table
/// schema would. It also counts put requests so tests can verify that
/// a failed marshal never reached the store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    partition_key: String,
    sort_key: Option<String>,
    items: Arc<RwLock<Vec<(Item, Item)>>>,
    puts: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Creates an empty store with the given key schema.
    pub fn new(partition_key: impl Into<String>, sort_key: Option<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key,
            items: Arc::new(RwLock::new(Vec::new())),
            puts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of items currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Number of put requests received, including replacements.
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Extracts the primary key attributes from a full item.
    fn key_of(&self, item: &Item) -> Result<Item> {
        let mut key = Item::new();

        let partition = item.get(&self.partition_key).ok_or_else(|| {
            RepositoryError::Store(format!(
                "item is missing partition key attribute '{}'",
                self.partition_key
            ))
        })?;
        key.insert(self.partition_key.clone(), partition.clone());

        if let Some(name) = &self.sort_key {
            let sort = item.get(name).ok_or_else(|| {
                RepositoryError::Store(format!("item is missing sort key attribute '{name}'"))
            })?;
            key.insert(name.clone(), sort.clone());
        }

        Ok(key)
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn get_item(&self, _table: &str, key: Item) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|(stored_key, _)| *stored_key == key)
            .map(|(_, item)| item.clone()))
    }

    async fn put_item(&self, _table: &str, item: Item) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);

        let key = self.key_of(&item)?;
        let mut items = self.items.write().await;
        match items.iter_mut().find(|(stored_key, _)| *stored_key == key) {
            Some(slot) => slot.1 = item,
            None => items.push((key, item)),
        }

        Ok(())
    }
}
