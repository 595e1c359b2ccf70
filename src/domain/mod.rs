//! Domain models for the offline content store
//!
//! Pure value types representing a downloaded exhibition and its artworks.
//! These carry no filesystem knowledge; storage layout lives in the store.

pub mod exhibition;

pub use exhibition::{DownloadedArtwork, DownloadedExhibition};
