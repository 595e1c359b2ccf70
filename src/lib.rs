//! Docent offline content store
//!
//! Persists downloaded exhibition bundles (one JSON metadata record plus
//! one directory of cached media per exhibition) on local storage,
//! enumerates them, and removes them individually, in bulk, or entirely.
//!
//! # Architecture
//!
//! - [`codec`] - JSON codec for the per-exhibition metadata record
//! - [`store`] - on-disk layout owner: create/read/enumerate/delete
//! - [`catalog`] - in-memory projection of the store plus selection state
//! - [`eviction`] - single/multi-select/full-wipe deletion and catalog
//!   reconciliation
//!
//! A downloaded exhibition is one logical entity backed by two independent
//! filesystem objects keyed by its id. There is no multi-file transaction:
//! consistency comes from idempotent per-object deletes, first-class orphan
//! detection, and best-effort batches that report a typed partial result.

pub mod catalog;
pub mod codec;
pub mod domain;
pub mod error;
pub mod eviction;
pub mod store;

#[cfg(test)]
pub mod test_fixtures;

pub use catalog::Catalog;
pub use domain::{DownloadedArtwork, DownloadedExhibition};
pub use error::{DecodeError, Result, StoreError};
pub use eviction::{BatchResult, EvictionCoordinator};
pub use store::{ContentStore, Orphan, Presence};
