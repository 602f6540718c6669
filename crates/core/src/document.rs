//! The contract a storable document type implements.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A document that can be persisted by a repository.
///
/// Documents are structurally marshaled field-by-field into the store's
/// attribute representation; beyond that the repository treats them as
/// opaque. The only thing a document must expose is its own primary
/// key via [`Document::key`].
///
/// The key attributes reported by `key()` are authoritative: on a
/// write they overwrite whatever the structural marshaling of the
/// document produced under the same attribute names.
///
/// Tables without a sort key return `None` for the sort half of the
/// key. The sort type still has to be named; `()` does not serialize
/// to a DynamoDB scalar, so pick any ordered scalar type (it is never
/// serialized when the repository is configured without a sort-key
/// attribute name).
///
/// # Example
///
/// ```
/// use dynadoc_core::Document;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct User {
///     name: String,
///     email: String,
///     version: i32,
/// }
///
/// impl Document for User {
///     type Partition = String;
///     type Sort = i32;
///
///     fn key(&self) -> (String, Option<i32>) {
///         (self.email.clone(), Some(self.version))
///     }
/// }
/// ```
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Partition key type. Must be totally ordered and serializable to
    /// a store scalar (string, number, or binary).
    type Partition: Serialize + Ord + Send + Sync;

    /// Sort key type, with the same requirements as the partition key.
    type Sort: Serialize + Ord + Send + Sync;

    /// Returns the document's partition value and, for tables with a
    /// sort key, its sort value.
    fn key(&self) -> (Self::Partition, Option<Self::Sort>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        topic: String,
        revision: u32,
        body: String,
    }

    impl Document for Note {
        type Partition = String;
        type Sort = u32;

        fn key(&self) -> (String, Option<u32>) {
            (self.topic.clone(), Some(self.revision))
        }
    }

    #[test]
    fn key_reports_partition_and_sort() {
        let note = Note {
            topic: "boondocks".to_string(),
            revision: 3,
            body: "hello".to_string(),
        };

        let (partition, sort) = note.key();
        assert_eq!(partition, "boondocks");
        assert_eq!(sort, Some(3));
    }
}
