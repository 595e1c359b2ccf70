//! On-disk content store for downloaded exhibitions
//!
//! Sole owner of the store subtree; no other component opens, writes, or
//! deletes files under it. Each exhibition is backed by two filesystem
//! objects keyed by the same id: a metadata record under `meta/` and an
//! asset directory under `exhibitions/`. The pair is reconciled by
//! convention, not by a transaction log: every removal is idempotent per
//! sub-object, and a half-present pair is a detectable orphan state rather
//! than an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::domain::DownloadedExhibition;
use crate::error::{Result, StoreError};

pub mod paths;
pub mod stats;

pub use paths::{EXHIBITIONS_DIR, META_DIR, default_root};
pub use stats::{ExhibitionSize, StoreStats, exhibition_sizes, store_stats};

/// Which halves of an exhibition's on-disk pair are present.
///
/// `MetaOnly` and `AssetsOnly` are the orphan states: the downloader
/// contract was violated or a delete was interrupted. Orphans are surfaced,
/// never repaired automatically; retrying `delete` clears either state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Metadata record and asset directory both exist
    Both,
    /// Metadata record with no asset directory
    MetaOnly,
    /// Asset directory with no metadata record
    AssetsOnly,
    /// Neither half exists
    Absent,
}

impl Presence {
    /// True iff either half exists
    pub fn is_present(self) -> bool {
        self != Presence::Absent
    }

    /// True iff exactly one half exists
    pub fn is_orphan(self) -> bool {
        matches!(self, Presence::MetaOnly | Presence::AssetsOnly)
    }
}

/// An exhibition id whose two on-disk halves disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub id: String,
    pub presence: Presence,
}

/// Handle to the store subtree rooted at one directory.
#[derive(Debug)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Open a store at the given root, creating `meta/` and `exhibitions/`
    /// if they do not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { root: root.into() };
        for dir in [store.meta_dir(), store.exhibitions_dir()] {
            fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, &e))?;
        }
        Ok(store)
    }

    /// Open the store at the platform default location
    /// (see [`paths::default_root`]).
    pub fn open_default() -> Result<Self> {
        Self::open(paths::default_root()?)
    }

    /// Root directory of the store subtree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the metadata records
    pub fn meta_dir(&self) -> PathBuf {
        self.root.join(META_DIR)
    }

    /// Directory holding the per-exhibition asset directories
    pub fn exhibitions_dir(&self) -> PathBuf {
        self.root.join(EXHIBITIONS_DIR)
    }

    /// Path of the metadata record for an exhibition id
    pub fn meta_path(&self, id: &str) -> Result<PathBuf> {
        paths::validate_id(id)?;
        Ok(self.meta_dir().join(paths::meta_file_name(id)))
    }

    /// Path of the asset directory for an exhibition id
    pub fn assets_path(&self, id: &str) -> Result<PathBuf> {
        paths::validate_id(id)?;
        Ok(self.exhibitions_dir().join(id))
    }

    /// Persist an exhibition's metadata record and ensure its asset
    /// directory exists.
    ///
    /// An existing record for the same id is replaced in full; the asset
    /// directory and its contents are left in place. This is the seam the
    /// downloader writes through.
    pub fn save(&self, exhibition: &DownloadedExhibition) -> Result<()> {
        let meta_path = self.meta_path(&exhibition.id)?;
        let assets_path = self.assets_path(&exhibition.id)?;

        let text = codec::encode(exhibition).map_err(|e| StoreError::Io {
            path: meta_path.display().to_string(),
            reason: format!("failed to serialize metadata record: {e}"),
        })?;

        fs::create_dir_all(&assets_path).map_err(|e| StoreError::io(&assets_path, &e))?;
        fs::write(&meta_path, text).map_err(|e| StoreError::io(&meta_path, &e))?;

        tracing::debug!(id = %exhibition.id, "saved exhibition metadata record");
        Ok(())
    }

    /// Read and decode the metadata record for one exhibition id.
    ///
    /// Returns `Ok(None)` when no record exists. Unlike enumeration, a
    /// single-record read surfaces a malformed document to the caller.
    pub fn read(&self, id: &str) -> Result<Option<DownloadedExhibition>> {
        let meta_path = self.meta_path(id)?;
        let text = match fs::read_to_string(&meta_path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&meta_path, &e)),
        };

        let exhibition = codec::decode(&text).map_err(|source| StoreError::CorruptRecord {
            id: id.to_string(),
            source,
        })?;
        Ok(Some(exhibition))
    }

    /// Enumerate every decodable metadata record, in filesystem
    /// enumeration order (not guaranteed stable across runs).
    ///
    /// A record that fails to decode is skipped with a warning so one
    /// corrupt file never blocks listing the rest. Files that do not follow
    /// the metadata naming convention are ignored. I/O errors other than
    /// not-found propagate.
    pub fn list_all(&self) -> Result<Vec<DownloadedExhibition>> {
        let meta_dir = self.meta_dir();
        let entries = match fs::read_dir(&meta_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&meta_dir, &e)),
        };

        let mut exhibitions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&meta_dir, &e))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if paths::id_from_meta_file_name(name).is_none() {
                continue;
            }

            let path = entry.path();
            let text = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, &e))?;
            match codec::decode(&text) {
                Ok(exhibition) => exhibitions.push(exhibition),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping malformed metadata record"
                    );
                }
            }
        }
        Ok(exhibitions)
    }

    /// True iff either the metadata record or the asset directory exists.
    ///
    /// An id that cannot name a storage location reports `false`.
    pub fn exists(&self, id: &str) -> bool {
        self.presence(id).is_present()
    }

    /// Report which halves of the on-disk pair exist for an id.
    pub fn presence(&self, id: &str) -> Presence {
        let (Ok(meta_path), Ok(assets_path)) = (self.meta_path(id), self.assets_path(id)) else {
            return Presence::Absent;
        };
        match (meta_path.is_file(), assets_path.is_dir()) {
            (true, true) => Presence::Both,
            (true, false) => Presence::MetaOnly,
            (false, true) => Presence::AssetsOnly,
            (false, false) => Presence::Absent,
        }
    }

    /// Remove the metadata record and the asset directory for an id.
    ///
    /// Both removals are idempotent: a missing target counts as removed, so
    /// retrying after a partial failure and cleaning up an orphan both work.
    /// Both halves are always attempted; if one fails the other's success is
    /// not rolled back and the first failure is returned. The caller's
    /// recovery is to call `delete(id)` again.
    pub fn delete(&self, id: &str) -> Result<()> {
        let meta_path = self.meta_path(id)?;
        let assets_path = self.assets_path(id)?;

        let meta_result = match fs::remove_file(&meta_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&meta_path, &e)),
        };
        let assets_result = match fs::remove_dir_all(&assets_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&assets_path, &e)),
        };

        meta_result?;
        assets_result?;
        tracing::debug!(id = %id, "deleted exhibition");
        Ok(())
    }

    /// Enumerate ids whose metadata record and asset directory disagree.
    ///
    /// Pairs metadata file names against `exhibitions/` entries without
    /// decoding anything; a corrupt record still counts as present here.
    pub fn orphans(&self) -> Result<Vec<Orphan>> {
        let mut ids = std::collections::BTreeSet::new();
        for name in self.meta_file_names()? {
            if let Some(id) = paths::id_from_meta_file_name(&name) {
                ids.insert(id.to_string());
            }
        }
        for id in self.asset_dir_names()? {
            ids.insert(id);
        }

        Ok(ids
            .into_iter()
            .map(|id| {
                let presence = self.presence(&id);
                Orphan { id, presence }
            })
            .filter(|orphan| orphan.presence.is_orphan())
            .collect())
    }

    /// Check an exhibition's artwork refs against its asset directory.
    ///
    /// Returns the refs that are absolute, escape the asset directory, or
    /// do not resolve to an existing file. A non-empty result is a
    /// corruption condition for the caller to surface.
    pub fn broken_asset_refs(&self, exhibition: &DownloadedExhibition) -> Result<Vec<String>> {
        let assets_path = self.assets_path(&exhibition.id)?;
        let broken = exhibition
            .asset_refs()
            .filter(|r| {
                let path = Path::new(r);
                path.is_absolute()
                    || path
                        .components()
                        .any(|c| matches!(c, std::path::Component::ParentDir))
                    || !assets_path.join(path).is_file()
            })
            .map(String::from)
            .collect();
        Ok(broken)
    }

    fn meta_file_names(&self) -> Result<Vec<String>> {
        let meta_dir = self.meta_dir();
        let entries = match fs::read_dir(&meta_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&meta_dir, &e)),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&meta_dir, &e))?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn asset_dir_names(&self) -> Result<Vec<String>> {
        let exhibitions_dir = self.exhibitions_dir();
        let entries = match fs::read_dir(&exhibitions_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&exhibitions_dir, &e)),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&exhibitions_dir, &e))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}
