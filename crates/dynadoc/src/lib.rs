//! Typed document repository over DynamoDB.
//!
//! `dynadoc` wraps a DynamoDB table in a small typed API: one
//! [`Repository`] per document type, with exactly two operations —
//! [`Repository::get`] (a single point read) and [`Repository::store`]
//! (a single unconditional put). Documents are structurally marshaled
//! to and from the attribute representation via serde; the key fields
//! reported by [`Document::key`](dynadoc_core::Document::key) are
//! injected last and always win over whatever the document's own
//! fields would have produced under the key attribute names.
//!
//! The repository talks to the store through the [`StoreClient`] seam.
//! `aws_sdk_dynamodb::Client` implements it directly; the
//! [`MemoryStore`] backend (feature `inmemory`, enabled by default)
//! covers tests without a running DynamoDB.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dynadoc::{Repository, StoreConfig};
//! use dynadoc_core::Document;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     email: String,
//!     version: i32,
//! }
//!
//! impl Document for User {
//!     type Partition = String;
//!     type Sort = i32;
//!
//!     fn key(&self) -> (String, Option<i32>) {
//!         (self.email.clone(), Some(self.version))
//!     }
//! }
//!
//! # async fn example() -> dynadoc_core::Result<()> {
//! let config = StoreConfig::from_env();
//! let client = Arc::new(config.connect().await);
//! let users: Repository<User> =
//!     Repository::new(client, "users", "email", Some("version".to_string()));
//!
//! users
//!     .store(&User {
//!         name: "Test User".to_string(),
//!         email: "admin@example.com".to_string(),
//!         version: 0,
//!     })
//!     .await?;
//!
//! let found = users.get(&"admin@example.com".to_string(), Some(&0)).await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod marshal;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use repository::Repository;
pub use store::{Item, StoreClient};

#[cfg(feature = "inmemory")]
pub use store::memory::MemoryStore;
