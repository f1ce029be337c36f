use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Image formats recognised by extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Other(String),
}

impl ImageFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            other => Self::Other(other.to_string()),
        }
    }

    /// Check if format is supported
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Representation of an image file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    /// Full path to the image file
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Image format
    pub format: ImageFormat,
}

/// A later file whose content matches an earlier one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DuplicatePair {
    /// The file encountered after the original
    pub duplicate: PathBuf,

    /// The first file seen with this content
    pub original: PathBuf,
}

impl DuplicatePair {
    pub fn new(duplicate: impl Into<PathBuf>, original: impl Into<PathBuf>) -> Self {
        Self {
            duplicate: duplicate.into(),
            original: original.into(),
        }
    }
}

/// Result of resolving a single duplicate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// The chosen file was removed
    Deleted { deleted: PathBuf, kept: PathBuf },

    /// The chosen file was gone before removal
    AlreadyAbsent { path: PathBuf },

    /// Removal was not performed because of an error
    Failed { path: PathBuf, error: String },
}

impl ResolutionOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Aggregated result of resolving a batch of pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    /// Number of files removed
    pub deleted: usize,

    /// Number of pairs where nothing was removed
    pub skipped: usize,

    /// Per-pair outcomes, in input order
    pub outcomes: Vec<ResolutionOutcome>,
}

impl ResolutionSummary {
    pub fn record(&mut self, outcome: ResolutionOutcome) {
        if outcome.is_deleted() {
            self.deleted += 1;
        } else {
            self.skipped += 1;
        }
        self.outcomes.push(outcome);
    }

    /// `(deleted, skipped)` counts
    pub fn counts(&self) -> (usize, usize) {
        (self.deleted, self.skipped)
    }
}
