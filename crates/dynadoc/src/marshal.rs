//! Attribute conversion functions.
//!
//! Pure functions for converting between typed values and the DynamoDB
//! attribute representation. These are testable in isolation without
//! DynamoDB access. Every failure becomes
//! [`RepositoryError::Serialization`].

use aws_sdk_dynamodb::types::AttributeValue;
use dynadoc_core::{RepositoryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::Item;

/// Structurally serialize a value into a full attribute map.
pub fn to_item<T: Serialize>(value: &T) -> Result<Item> {
    serde_dynamo::to_item(value).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Serialize a single value (a key field) into an attribute.
pub fn to_attribute_value<T: Serialize>(value: &T) -> Result<AttributeValue> {
    serde_dynamo::to_attribute_value(value)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Deserialize an attribute map into a typed value.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T> {
    serde_dynamo::from_item(item).map_err(|e| RepositoryError::Serialization(e.to_string()))
}
