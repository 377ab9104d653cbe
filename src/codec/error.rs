use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::schema::SchemaMismatch;

/// Errors that can occur while encoding or decoding an artifact
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input is not shaped like the user table; nothing was written
    #[error("Type mismatch: {0}")]
    TypeMismatch(#[from] SchemaMismatch),

    /// The artifact to decode does not exist
    #[error("Artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The artifact exists but cannot be parsed under the codec's grammar
    #[error("Malformed artifact {}: {reason}", path.display())]
    MalformedArtifact {
        /// Path of the offending artifact
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the Arrow library while building batches
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Error from the Parquet library while writing
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// Error from the CSV writer
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from the JSON serializer
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CodecError {
    /// Build a [`CodecError::MalformedArtifact`] for `path`
    pub fn malformed(path: &Path, reason: impl Display) -> Self {
        Self::MalformedArtifact {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error reports a missing artifact
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
