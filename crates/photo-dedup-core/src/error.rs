use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the photo-dedup library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be decoded or normalized as an image
    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// File not found error
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Deletion target vanished before it could be removed
    #[error("File already absent: {0}")]
    FileAlreadyAbsent(PathBuf),

    /// Removal failed for a reason other than the file being absent
    #[error("Failed to delete {}: {source}", .path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Safety check failure
    #[error("Safety check failed: {0}")]
    SafetyCheck(String),

    /// Worker pool for fingerprinting could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ImageDecode { path, .. }
            | Self::Deletion { path, .. }
            | Self::FileNotFound(path)
            | Self::FileAlreadyAbsent(path) => Some(path.as_path()),
            _ => None,
        }
    }
}
