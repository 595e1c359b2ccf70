//! Downloaded exhibition aggregate
//!
//! A downloaded exhibition is backed on disk by two objects that share its
//! id: a metadata record (this type, serialized) and an asset directory
//! holding the cached media the artwork refs point into.

use serde::{Deserialize, Serialize};

/// One artwork inside a downloaded exhibition.
///
/// `local_asset_ref` and `local_thumb_ref` are paths relative to the owning
/// exhibition's asset directory. A ref that escapes that directory is a
/// corruption condition, surfaced by the store's consistency checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadedArtwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub local_asset_ref: String,
    pub local_thumb_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

/// A downloaded exhibition: the aggregate root persisted per metadata record.
///
/// The id uniquely derives both storage locations (metadata file name and
/// asset directory name). Artwork order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadedExhibition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cover_image_ref: String,
    #[serde(default)]
    pub introduction: String,
    pub artworks: Vec<DownloadedArtwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

impl DownloadedExhibition {
    /// Iterate every local media ref (audio and thumbnail) of every artwork.
    pub fn asset_refs(&self) -> impl Iterator<Item = &str> {
        self.artworks.iter().flat_map(|artwork| {
            [
                artwork.local_asset_ref.as_str(),
                artwork.local_thumb_ref.as_str(),
            ]
        })
    }
}
