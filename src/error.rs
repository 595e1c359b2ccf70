//! Error types for the offline content store
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Failure to decode a persisted metadata record.
///
/// Raised only when the document is not valid JSON or a required field
/// (`id`, `title`, `artworks`) is absent or of the wrong shape. Absent
/// optional fields are never an error.
#[derive(Error, Diagnostic, Debug)]
pub enum DecodeError {
    #[error("Malformed metadata record: {reason}")]
    #[diagnostic(
        code(docent::codec::malformed),
        help("The record cannot be repaired; re-download the exhibition")
    )]
    Malformed { reason: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Malformed {
            reason: err.to_string(),
        }
    }
}

/// Errors raised by the content store.
///
/// "Not found" is never surfaced here: deletes treat an absent target as
/// success so they stay idempotent, and single-record reads report absence
/// as `None`.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("I/O failure at {path}: {reason}")]
    #[diagnostic(
        code(docent::store::io),
        help("Check device storage and file permissions, then retry the operation")
    )]
    Io { path: String, reason: String },

    #[error("Invalid exhibition id: {id:?}")]
    #[diagnostic(
        code(docent::store::invalid_id),
        help("Exhibition ids must be non-empty and must not contain path separators")
    )]
    InvalidId { id: String },

    #[error("Metadata record for '{id}' is malformed")]
    #[diagnostic(code(docent::store::corrupt_record))]
    CorruptRecord {
        id: String,
        #[source]
        source: DecodeError,
    },

    #[error("Could not determine a data directory for the content store")]
    #[diagnostic(
        code(docent::store::no_data_root),
        help("Set DOCENT_DATA_DIR to choose the store location explicitly")
    )]
    NoDataRoot,
}

impl StoreError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
