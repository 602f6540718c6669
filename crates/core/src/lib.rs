//! Core contracts for the dynadoc typed document repository.
//!
//! This crate defines the [`Document`] trait a storable type implements
//! and the error surface shared by every backend. It deliberately has
//! no AWS dependencies so document types can live in crates that never
//! touch the SDK.

pub mod document;
pub mod error;

pub use document::Document;
pub use error::{RepositoryError, Result};
