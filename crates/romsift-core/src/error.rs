//! Error types for romsift-core

use std::path::PathBuf;

/// Result type for romsift-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in romsift-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base directory holding all categories does not exist
    #[error("Base directory not found: {path}")]
    BaseDirNotFound { path: PathBuf },

    /// A generated list file the sync engine needs is missing
    #[error("List file not found: {path}")]
    ListNotFound { path: PathBuf },

    /// The destination category directory is missing when pruning
    #[error("Destination directory not found: {path}")]
    DestinationNotFound { path: PathBuf },

    /// The operator declined to create a required directory
    #[error("{category}: unable to proceed, creation of {path} was declined")]
    CreationDeclined { category: String, path: PathBuf },

    /// A freshly copied file does not hash to its source
    #[error("Hash sum mismatch after copy (I/O error?): {path}: expected {expected}, got {actual}")]
    HashMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The confirmation prompt itself failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Filesystem error from romsift-fs
    #[error(transparent)]
    Fs(#[from] romsift_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors that mean a copy can no longer be trusted.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::HashMismatch { .. })
    }
}
