//! Storage statistics
//!
//! Sizes for the download-manager screen: how much device storage each
//! downloaded exhibition occupies and what the store holds in total.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

use super::ContentStore;

/// Asset-directory size of one downloaded exhibition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhibitionSize {
    pub id: String,
    /// Size of the asset directory in bytes
    pub size: u64,
}

impl ExhibitionSize {
    /// Format size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Aggregate statistics for the whole store
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of asset directories present
    pub exhibitions: usize,
    /// Total asset size in bytes
    pub total_size: u64,
}

impl StoreStats {
    /// Format total size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// Per-exhibition asset sizes, sorted by id
pub fn exhibition_sizes(store: &ContentStore) -> Result<Vec<ExhibitionSize>> {
    let mut sizes: Vec<ExhibitionSize> = store
        .asset_dir_names()?
        .into_iter()
        .map(|id| {
            let size = store
                .assets_path(&id)
                .map(|path| dir_size(&path))
                .unwrap_or(0);
            ExhibitionSize { id, size }
        })
        .collect();
    sizes.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(sizes)
}

/// Aggregate statistics for the whole store
pub fn store_stats(store: &ContentStore) -> Result<StoreStats> {
    let sizes = exhibition_sizes(store)?;
    Ok(StoreStats {
        exhibitions: sizes.len(),
        total_size: sizes.iter().map(|s| s.size).sum(),
    })
}

fn format_size(size: u64) -> String {
    let value = size as f64;
    if value < 1024.0 {
        format!("{size} B")
    } else if value < 1024.0 * 1024.0 {
        format!("{:.1} KB", value / 1024.0)
    } else if value < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", value / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", value / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Calculate directory size recursively; unreadable entries count as zero
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
