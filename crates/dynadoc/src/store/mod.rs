//! Store backends.
//!
//! The repository reaches the backing store through the [`StoreClient`]
//! trait: a point get and a point put against a named table, over the
//! generic attribute-map representation. Nothing else — no query,
//! scan, batch, or table management.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use dynadoc_core::Result;

pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod memory;

/// An item (or primary key) in the store's attribute representation.
pub type Item = HashMap<String, AttributeValue>;

/// Point access to a key-value store.
///
/// Implementations must be safe for concurrent use; the repository
/// adds no locking of its own. Ordering between concurrent calls on
/// the same key is whatever the backing store provides.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Reads the item under `key`, or `None` if no item exists.
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>>;

    /// Writes `item`, fully replacing any existing item under the same
    /// primary key.
    async fn put_item(&self, table: &str, item: Item) -> Result<()>;
}
