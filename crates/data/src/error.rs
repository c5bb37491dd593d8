//! Error types for the data layer.

use diesel_domain::DomainError;
use diesel_domain::value_objects::AlkaneId;
use std::path::PathBuf;

/// Errors raised while loading or decoding external payloads.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Snapshot file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Payload is not valid JSON or does not match the expected schema.
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Payload matched the schema but carried an invalid domain value.
    #[error("Invalid payload value: {0}")]
    Domain(#[from] DomainError),
    /// No reflection is known for the requested alkane.
    #[error("No reflection found for alkane {0}")]
    ReflectionNotFound(AlkaneId),
    /// Upstream source could not answer.
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}
