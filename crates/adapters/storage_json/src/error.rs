//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use carwash_domain::collection::Collection;
use carwash_domain::error::CarwashError;

/// Errors originating from the JSON storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A collection file could not be read, written or renamed.
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection file does not contain a valid JSON array of records.
    #[error("malformed JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be converted to or from their JSON form in memory.
    #[error("failed to encode collection {collection}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for CarwashError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
