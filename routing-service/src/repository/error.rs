//! Seed loading error types.

use crate::domain::{InvalidUnLocode, InvalidVoyageNumber};

/// Errors that can occur while loading repository seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A location entry has a malformed code
    #[error("seed location: {0}")]
    InvalidLocation(#[from] InvalidUnLocode),

    /// A voyage entry has a malformed number
    #[error("seed voyage: {0}")]
    InvalidVoyage(#[from] InvalidVoyageNumber),
}
