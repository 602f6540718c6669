//! Behavioral tests for the repository against the in-memory store.

use std::sync::Arc;

use dynadoc::{MemoryStore, Repository, StoreClient};
use dynadoc_core::{Document, RepositoryError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    email: String,
    version: i32,
}

impl Document for User {
    type Partition = String;
    type Sort = i32;

    fn key(&self) -> (String, Option<i32>) {
        (self.email.clone(), Some(self.version))
    }
}

/// A document whose declared key disagrees with its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Alias {
    email: String,
    canonical_email: String,
    name: String,
}

impl Document for Alias {
    type Partition = String;
    type Sort = i32;

    fn key(&self) -> (String, Option<i32>) {
        (self.canonical_email.clone(), None)
    }
}

fn versioned_repo(store: &MemoryStore) -> Repository<User> {
    Repository::new(
        Arc::new(store.clone()),
        "users",
        "email",
        Some("version".to_string()),
    )
}

fn admin() -> User {
    User {
        name: "Test User".to_string(),
        email: "admin@example.com".to_string(),
        version: 0,
    }
}

#[tokio::test]
async fn store_then_get_round_trips_all_fields() {
    let store = MemoryStore::new("email", Some("version".to_string()));
    let repo = versioned_repo(&store);

    repo.store(&admin()).await.unwrap();

    let found = repo
        .get(&"admin@example.com".to_string(), Some(&0))
        .await
        .unwrap();
    assert_eq!(found, Some(admin()));
}

#[tokio::test]
async fn get_on_missing_key_returns_none() {
    let store = MemoryStore::new("email", Some("version".to_string()));
    let repo = versioned_repo(&store);

    let found = repo
        .get(&"nobody@example.com".to_string(), Some(&0))
        .await
        .unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn declared_key_overrides_structural_fields() {
    let store = MemoryStore::new("email", None);
    let repo: Repository<Alias> = Repository::new(Arc::new(store.clone()), "users", "email", None);

    repo.store(&Alias {
        email: "alias@example.com".to_string(),
        canonical_email: "real@example.com".to_string(),
        name: "Test User".to_string(),
    })
    .await
    .unwrap();

    // The persisted "email" attribute is what key() reported, not what
    // the field held, so the item is only reachable under the key value.
    let found = repo
        .get(&"real@example.com".to_string(), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email, "real@example.com");

    let by_field = repo.get(&"alias@example.com".to_string(), None).await.unwrap();
    assert_eq!(by_field, None);
}

#[tokio::test]
async fn no_sort_attribute_is_sent_without_a_sort_schema() {
    // Key schema without a sort key, document whose key() still
    // supplies a sort value.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        id: String,
        total: u64,
    }

    impl Document for Counter {
        type Partition = String;
        type Sort = i32;

        fn key(&self) -> (String, Option<i32>) {
            (self.id.clone(), Some(7))
        }
    }

    let store = MemoryStore::new("id", None);
    let repo: Repository<Counter> = Repository::new(Arc::new(store.clone()), "counters", "id", None);

    repo.store(&Counter {
        id: "hits".to_string(),
        total: 3,
    })
    .await
    .unwrap();

    // Raw item carries no attribute for the sort value key() offered.
    let mut key = dynadoc::Item::new();
    key.insert(
        "id".to_string(),
        aws_sdk_dynamodb::types::AttributeValue::S("hits".to_string()),
    );
    let raw = store.get_item("counters", key).await.unwrap().unwrap();
    assert_eq!(raw.len(), 2);
    assert!(raw.contains_key("id"));
    assert!(raw.contains_key("total"));

    // A sort value passed to get is ignored when no sort key is
    // configured.
    let found = repo.get(&"hits".to_string(), Some(&7)).await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn sort_value_is_mandatory_when_schema_has_a_sort_key() {
    let store = MemoryStore::new("email", Some("version".to_string()));
    let repo = versioned_repo(&store);

    let err = repo
        .get(&"admin@example.com".to_string(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Serialization(_)));
    assert!(err.to_string().contains("version"));
}

#[tokio::test]
async fn failed_marshal_issues_no_put() {
    #[derive(Debug, Clone)]
    struct Opaque;

    impl Serialize for Opaque {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("opaque value is not serializable"))
        }
    }

    impl<'de> Deserialize<'de> for Opaque {
        fn deserialize<D: serde::Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
            Err(serde::de::Error::custom("opaque value is not deserializable"))
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Broken {
        id: String,
        payload: Opaque,
    }

    impl Document for Broken {
        type Partition = String;
        type Sort = i32;

        fn key(&self) -> (String, Option<i32>) {
            (self.id.clone(), None)
        }
    }

    let store = MemoryStore::new("id", None);
    let repo: Repository<Broken> = Repository::new(Arc::new(store.clone()), "things", "id", None);

    let err = repo
        .store(&Broken {
            id: "x".to_string(),
            payload: Opaque,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Serialization(_)));
    assert_eq!(store.put_count(), 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn distinct_keys_do_not_interfere() {
    let store = MemoryStore::new("email", Some("version".to_string()));
    let repo = versioned_repo(&store);

    let first = admin();
    let second = User {
        name: "Other User".to_string(),
        email: "other@example.com".to_string(),
        version: 2,
    };

    repo.store(&first).await.unwrap();
    repo.store(&second).await.unwrap();

    assert_eq!(
        repo.get(&first.email, Some(&first.version)).await.unwrap(),
        Some(first.clone())
    );
    assert_eq!(
        repo.get(&second.email, Some(&second.version)).await.unwrap(),
        Some(second)
    );
    // Same partition, different sort value: still distinct.
    assert_eq!(repo.get(&first.email, Some(&1)).await.unwrap(), None);
}

#[tokio::test]
async fn store_replaces_the_whole_item() {
    let store = MemoryStore::new("email", Some("version".to_string()));
    let repo = versioned_repo(&store);

    repo.store(&admin()).await.unwrap();
    let renamed = User {
        name: "Renamed User".to_string(),
        ..admin()
    };
    repo.store(&renamed).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(
        repo.get(&renamed.email, Some(&renamed.version))
            .await
            .unwrap(),
        Some(renamed)
    );
}

#[tokio::test]
async fn repository_is_shareable_across_tasks() {
    let store = MemoryStore::new("email", Some("version".to_string()));
    let repo = versioned_repo(&store);

    let mut handles = Vec::new();
    for version in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let user = User {
                name: format!("User {version}"),
                email: "shared@example.com".to_string(),
                version,
            };
            repo.store(&user).await.unwrap();
            repo.get(&user.email, Some(&version)).await.unwrap().unwrap()
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(store.len().await, 8);
}
