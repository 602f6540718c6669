//! The typed document repository.

use std::marker::PhantomData;
use std::sync::Arc;

use dynadoc_core::{Document, RepositoryError, Result};

use crate::marshal;
use crate::store::{Item, StoreClient};

/// A typed repository over one table.
///
/// Holds an immutable configuration tuple: the store client, the table
/// name, the partition-key attribute name, and an optional sort-key
/// attribute name. One instance is constructed per (document type,
/// table) pairing and shared for the life of the process; it owns no
/// mutable state, so clones are cheap and concurrent use is as safe as
/// the underlying client.
///
/// Both operations are a single request/response round trip against
/// the store. The repository imposes no timeout, retry, or ordering
/// guarantee beyond what the client provides.
pub struct Repository<D> {
    client: Arc<dyn StoreClient>,
    table: String,
    partition_key: String,
    sort_key: Option<String>,
    _document: PhantomData<fn() -> D>,
}

impl<D> Clone for Repository<D> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            table: self.table.clone(),
            partition_key: self.partition_key.clone(),
            sort_key: self.sort_key.clone(),
            _document: PhantomData,
        }
    }
}

impl<D: Document> Repository<D> {
    /// Creates a repository with the given client and table schema.
    ///
    /// The configuration is stored verbatim; nothing is validated
    /// here. A `sort_key` of `None` means the table has no sort key
    /// and sort values are ignored everywhere.
    pub fn new(
        client: Arc<dyn StoreClient>,
        table: impl Into<String>,
        partition_key: impl Into<String>,
        sort_key: Option<String>,
    ) -> Self {
        Self {
            client,
            table: table.into(),
            partition_key: partition_key.into(),
            sort_key,
            _document: PhantomData,
        }
    }

    /// Get the table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Reads the document under the given key.
    ///
    /// Returns `Ok(None)` when no item exists under the key. When the
    /// repository is configured with a sort-key attribute name, `sort`
    /// is mandatory and its absence is a serialization error; without
    /// one, a supplied `sort` is ignored.
    pub async fn get(
        &self,
        partition: &D::Partition,
        sort: Option<&D::Sort>,
    ) -> Result<Option<D>> {
        let key = self.primary_key(partition, sort)?;

        tracing::debug!(table = %self.table, "get document");
        let item = self.client.get_item(&self.table, key).await?;

        match item {
            Some(item) => Ok(Some(marshal::from_item(item)?)),
            None => Ok(None),
        }
    }

    /// Writes the document, fully replacing any existing item under
    /// its key.
    ///
    /// The document is structurally marshaled field-by-field, then the
    /// key attributes are overwritten with freshly serialized values
    /// from [`Document::key`] — the persisted key attributes always
    /// match what `key()` reports, even if the document's own fields
    /// under those attribute names would have serialized differently.
    /// If marshaling fails, no request is issued.
    pub async fn store(&self, document: &D) -> Result<()> {
        let mut item = marshal::to_item(document)?;

        let (partition, sort) = document.key();
        item.insert(
            self.partition_key.clone(),
            marshal::to_attribute_value(&partition)?,
        );
        if let (Some(name), Some(sort)) = (&self.sort_key, &sort) {
            item.insert(name.clone(), marshal::to_attribute_value(sort)?);
        }

        tracing::debug!(table = %self.table, "store document");
        self.client.put_item(&self.table, item).await
    }

    /// Composes the primary-key attribute map for a point read.
    fn primary_key(&self, partition: &D::Partition, sort: Option<&D::Sort>) -> Result<Item> {
        let mut key = Item::new();
        key.insert(
            self.partition_key.clone(),
            marshal::to_attribute_value(partition)?,
        );

        if let Some(name) = &self.sort_key {
            let sort = sort.ok_or_else(|| {
                RepositoryError::Serialization(format!(
                    "sort value required: table '{}' defines sort key '{name}'",
                    self.table
                ))
            })?;
            key.insert(name.clone(), marshal::to_attribute_value(sort)?);
        }

        Ok(key)
    }
}
