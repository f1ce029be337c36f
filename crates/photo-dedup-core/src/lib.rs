//! Core functionality for finding and removing duplicate images.
//!
//! This library provides the components for content-based deduplication:
//! - File discovery in a stable traversal order
//! - Pixel-content fingerprinting after a fixed normalization
//! - Grouping of files by fingerprint (first seen is the original)
//! - A deterministic policy for which copy to delete, and the deletion itself

// -- External Dependencies --
use log::info;
use std::path::Path;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use deduplication::{find_duplicates, DuplicateRegistry};
pub use error::{Error, Result};
pub use processing::{fingerprint, ContentFingerprint};
pub use resolution::{choose_to_delete, resolve, PlannedDeletion, Resolver};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod deduplication;
pub mod discovery;
pub mod logging;
pub mod processing;
pub mod resolution;
pub mod safety;
pub mod types;

/// Main entry point for the scan-then-resolve workflow
pub struct PhotoDeduper {
    config: Config,
    resolver: Resolver,
}

impl PhotoDeduper {
    /// Create a new PhotoDeduper, rejecting an invalid configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let resolver = Resolver::new(&config);
        Ok(Self { config, resolver })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find every `(duplicate, original)` pair under `root`
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<Vec<DuplicatePair>> {
        let root = root.as_ref();
        info!("Scanning folder: {}", root.display());
        find_duplicates(root, &self.config)
    }

    /// Describe what `resolve` would delete, without deleting anything
    pub fn plan(&self, pairs: &[DuplicatePair]) -> Vec<PlannedDeletion> {
        self.resolver.plan(pairs)
    }

    /// Delete one file of each pair; call only after the user has confirmed
    pub fn resolve(&self, pairs: &[DuplicatePair]) -> ResolutionSummary {
        info!("Deleting duplicates from {} pairs", pairs.len());
        self.resolver.resolve(pairs)
    }
}
