//! Common test utilities for docent-store integration tests

use std::path::PathBuf;

use tempfile::TempDir;

use docent_store::domain::{DownloadedArtwork, DownloadedExhibition};
use docent_store::store::ContentStore;

/// A temp-rooted store for integration tests
pub struct TestStore {
    /// Temporary directory backing the store root
    #[allow(dead_code)]
    pub temp: TempDir,
    pub store: ContentStore,
}

impl TestStore {
    /// Create a new store in a fresh temp directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let store = ContentStore::open(temp.path()).expect("Failed to open store");
        Self { temp, store }
    }

    /// Build a valid exhibition value with one artwork
    pub fn exhibition(id: &str) -> DownloadedExhibition {
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

    /// Persist an exhibition and populate its asset directory with the
    /// media files its artwork refs point at
    pub fn seed(&self, id: &str) -> DownloadedExhibition {
        let exhibition = Self::exhibition(id);
        self.store
            .save(&exhibition)
            .expect("Failed to save exhibition");

        let assets = self.assets_path(id);
        for artwork in &exhibition.artworks {
            for reference in [&artwork.local_asset_ref, &artwork.local_thumb_ref] {
                let path = assets.join(reference);
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).expect("Failed to create asset directory");
                }
                std::fs::write(&path, b"media bytes").expect("Failed to write asset file");
            }
        }
        exhibition
    }

    /// Write a metadata record that will not decode
    #[allow(dead_code)]
    pub fn write_malformed_record(&self, id: &str) {
        let path = self.meta_path(id);
        std::fs::write(&path, "this is not json").expect("Failed to write malformed record");
    }

    #[allow(dead_code)]
    pub fn meta_path(&self, id: &str) -> PathBuf {
        self.store
            .meta_path(id)
            .expect("Failed to derive meta path")
    }

    #[allow(dead_code)]
    pub fn assets_path(&self, id: &str) -> PathBuf {
        self.store
            .assets_path(id)
            .expect("Failed to derive assets path")
    }

    /// Make the asset directory undeletable by dropping its write bit.
    ///
    /// `remove_dir_all` then fails because the children cannot be unlinked.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn lock_assets(&self, id: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.assets_path(id);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o555))
            .expect("Failed to lock asset directory");
    }

    /// Restore write permission so cleanup can remove the directory
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn unlock_assets(&self, id: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.assets_path(id);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to unlock asset directory");
    }
}
