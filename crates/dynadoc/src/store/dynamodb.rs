//! DynamoDB store backend.
//!
//! Implements [`StoreClient`] for `aws_sdk_dynamodb::Client`. Each call
//! is one SDK request; SDK failures are rendered with their full error
//! chain into [`RepositoryError::Store`] and surfaced as-is — no
//! retries, no classification.

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::Client;
use dynadoc_core::{RepositoryError, Result};

use super::{Item, StoreClient};

#[async_trait]
impl StoreClient for Client {
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        tracing::debug!(table, "issuing GetItem");

        let result = self
            .get_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(result.item)
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        tracing::debug!(table, "issuing PutItem");

        self.put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}

/// Map a GetItem SDK error to RepositoryError.
fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    RepositoryError::Store(format!("GetItem failed: {}", DisplayErrorContext(&err)))
}

/// Map a PutItem SDK error to RepositoryError.
fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    RepositoryError::Store(format!("PutItem failed: {}", DisplayErrorContext(&err)))
}
