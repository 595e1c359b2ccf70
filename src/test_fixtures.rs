//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers to create a temp-rooted store and populate it with downloaded
//! exhibitions whose asset directories hold real files, so orphan and
//! asset-ref checks exercise the same layout production writes.

use tempfile::TempDir;

use crate::domain::{DownloadedArtwork, DownloadedExhibition};
use crate::store::ContentStore;

/// Create a store rooted in a fresh temp directory.
///
/// Returns the `TempDir` (which cleans up on drop) and the opened store.
///
/// # Panics
///
/// Panics if the temp directory or store layout cannot be created.
#[must_use]
pub fn create_temp_store() -> (TempDir, ContentStore) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let store = ContentStore::open(temp.path()).expect("Failed to open store");
    (temp, store)
}

/// Build a valid exhibition value with one artwork.
#[must_use]
pub fn sample_exhibition(id: &str) -> DownloadedExhibition {
    DownloadedExhibition {
        id: id.to_string(),
        title: format!("Exhibition {id}"),
        cover_image_ref: "cover.jpg".to_string(),
        introduction: "An introduction.".to_string(),
        artworks: vec![DownloadedArtwork {
            id: format!("{id}-artwork-1"),
            title: "Artwork One".to_string(),
            artist: "Anonymous".to_string(),
            local_asset_ref: "artwork-1/audio.mp3".to_string(),
            local_thumb_ref: "artwork-1/thumb.jpg".to_string(),
            duration_seconds: Some(120.0),
        }],
        location: None,
        coin_count: None,
        is_liked: None,
    }
}

/// Persist a sample exhibition and populate its asset directory with the
/// media files its artwork refs point at.
///
/// # Panics
///
/// Panics if any write fails.
pub fn seed_exhibition(store: &ContentStore, id: &str) -> DownloadedExhibition {
    let exhibition = sample_exhibition(id);
    store.save(&exhibition).expect("Failed to save exhibition");

    let assets = store.assets_path(id).expect("Failed to derive assets path");
    for reference in exhibition.asset_refs() {
        let path = assets.join(reference);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create asset parent directory");
        }
        std::fs::write(&path, b"media bytes").expect("Failed to write asset file");
    }
    exhibition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_store() {
        let (temp, store) = create_temp_store();
        assert!(temp.path().exists());
        assert_eq!(store.root(), temp.path());
    }

    #[test]
    fn test_seed_exhibition_writes_both_halves() {
        let (_temp, store) = create_temp_store();
        let exhibition = seed_exhibition(&store, "ex-1");

        assert!(store.exists("ex-1"));
        let broken = store
            .broken_asset_refs(&exhibition)
            .expect("Failed to check refs");
        assert!(broken.is_empty());
    }
}
