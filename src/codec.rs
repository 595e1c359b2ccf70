//! Metadata record codec
//!
//! Serializes a [`DownloadedExhibition`] to and from the JSON document
//! persisted under `meta/`. Pure transformation, no filesystem access.
//!
//! Decoding is tolerant of absent optional fields (`location`, `coinCount`,
//! `isLiked`, `durationSeconds`); it fails only when the document is not
//! valid JSON or `id`/`title`/`artworks` are missing or mis-shaped.

use crate::domain::DownloadedExhibition;
use crate::error::DecodeError;

/// Encode an exhibition as a pretty-printed JSON metadata record.
pub fn encode(exhibition: &DownloadedExhibition) -> serde_json::Result<String> {
    serde_json::to_string_pretty(exhibition)
}

/// Decode a metadata record from JSON text.
pub fn decode(text: &str) -> Result<DownloadedExhibition, DecodeError> {
    Ok(serde_json::from_str(text)?)
}
