//! Store path utilities and layout constants
//!
//! The store owns a subtree rooted at one directory:
//!
//! ```text
//! <root>/
//! ├── meta/
//! │   └── downloadedExhibition_<id>.json
//! └── exhibitions/
//!     └── <id>/
//!         └── <cached media files>
//! ```
//!
//! Every path in the subtree is derived from the exhibition id alone, so
//! the metadata record and the asset directory pair up by convention with
//! no cross-reference file.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Default store directory name under the platform data directory
const DATA_DIR: &str = "docent";

/// Subdirectory holding one metadata record per downloaded exhibition
pub const META_DIR: &str = "meta";

/// Subdirectory holding one asset directory per downloaded exhibition
pub const EXHIBITIONS_DIR: &str = "exhibitions";

/// Metadata record file name prefix
pub const META_PREFIX: &str = "downloadedExhibition_";

/// Metadata record file name extension
pub const META_SUFFIX: &str = ".json";

/// Get the default store root.
///
/// Uses the platform's application data location (e.g. XDG on Linux,
/// Application Support on macOS) with a `docent` subdirectory. Can be
/// overridden with the `DOCENT_DATA_DIR` environment variable.
pub fn default_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DOCENT_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().ok_or(StoreError::NoDataRoot)?;
    Ok(base.join(DATA_DIR))
}

/// Validate an exhibition id for use as a path component.
///
/// Ids are opaque external identifiers, but they derive both storage
/// locations; an id that is empty or would traverse outside the store
/// subtree cannot name a storage location and is rejected rather than
/// sanitized.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(StoreError::InvalidId { id: id.to_string() });
    }
    Ok(())
}

/// Metadata record file name for an exhibition id
pub fn meta_file_name(id: &str) -> String {
    format!("{META_PREFIX}{id}{META_SUFFIX}")
}

/// Extract the exhibition id from a metadata record file name.
///
/// Returns `None` for files that do not follow the naming convention;
/// enumeration ignores those.
pub fn id_from_meta_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(META_PREFIX)
        .and_then(|rest| rest.strip_suffix(META_SUFFIX))
        .filter(|id| !id.is_empty())
}
