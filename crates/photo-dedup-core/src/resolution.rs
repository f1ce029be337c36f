//! Choosing and removing one file from each duplicate pair.
//!
//! The tie-break is a pure function of two file names:
//! - a name containing one of the copy patterns loses against one that does not
//! - otherwise the longer name loses
//! - on equal length the first argument loses

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_DELETE_PATTERNS};
use crate::error::{Error, Result};
use crate::logging::{log_deletion_error, log_fs_modification};
use crate::safety::SafetyManager;
use crate::types::{DuplicatePair, ResolutionOutcome, ResolutionSummary};

/// Which file of a pair will be removed and which survives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDeletion {
    pub delete: PathBuf,
    pub keep: PathBuf,
}

/// Returns true if the name contains any of the copy patterns (case-sensitive)
pub fn is_pattern_flagged<S: AsRef<str>>(name: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|pattern| name.contains(pattern.as_ref()))
}

/// Pick the path to delete using the default copy patterns
pub fn choose_to_delete<'a>(a: &'a Path, b: &'a Path) -> &'a Path {
    choose_to_delete_with(a, b, &DEFAULT_DELETE_PATTERNS)
}

/// Pick the path to delete from a pair of duplicates
pub fn choose_to_delete_with<'a, S: AsRef<str>>(a: &'a Path, b: &'a Path, patterns: &[S]) -> &'a Path {
    let a_name = a.file_name().unwrap_or(a.as_os_str());
    let b_name = b.file_name().unwrap_or(b.as_os_str());

    let a_flagged = is_pattern_flagged(&a_name.to_string_lossy(), patterns);
    let b_flagged = is_pattern_flagged(&b_name.to_string_lossy(), patterns);

    match (a_flagged, b_flagged) {
        (true, false) => a,
        (false, true) => b,
        _ if a_name.len() >= b_name.len() => a,
        _ => b,
    }
}

/// Applies the tie-break policy to duplicate pairs and removes the losers
#[derive(Debug, Clone)]
pub struct Resolver {
    patterns: Vec<String>,
    safety: SafetyManager,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        Self {
            patterns: config.delete_patterns.clone(),
            safety: SafetyManager::new(),
        }
    }

    /// Decide, without touching the disk, what resolving `pairs` would do
    pub fn plan(&self, pairs: &[DuplicatePair]) -> Vec<PlannedDeletion> {
        pairs.iter().map(|pair| self.plan_pair(pair)).collect()
    }

    fn plan_pair(&self, pair: &DuplicatePair) -> PlannedDeletion {
        let delete = choose_to_delete_with(&pair.duplicate, &pair.original, &self.patterns);
        let keep = if delete == pair.duplicate.as_path() {
            &pair.original
        } else {
            &pair.duplicate
        };

        PlannedDeletion {
            delete: delete.to_path_buf(),
            keep: keep.clone(),
        }
    }

    /// Delete one file per pair; never aborts on a single failure
    pub fn resolve(&self, pairs: &[DuplicatePair]) -> ResolutionSummary {
        let mut summary = ResolutionSummary::default();

        for pair in pairs {
            let outcome = self.execute(self.plan_pair(pair));
            summary.record(outcome);
        }

        info!(
            "Resolution complete: {} deleted, {} skipped",
            summary.deleted, summary.skipped
        );
        summary
    }

    fn execute(&self, planned: PlannedDeletion) -> ResolutionOutcome {
        let PlannedDeletion { delete, keep } = planned;

        match self.remove(&delete, &keep) {
            Ok(()) => {
                log_fs_modification(
                    "DELETE",
                    &delete,
                    Some(&format!("kept {}", keep.display())),
                );
                ResolutionOutcome::Deleted {
                    deleted: delete,
                    kept: keep,
                }
            }
            Err(Error::FileAlreadyAbsent(path)) => {
                warn!("File already gone: {}", path.display());
                ResolutionOutcome::AlreadyAbsent { path }
            }
            Err(e) => {
                log_deletion_error(&delete, &e);
                ResolutionOutcome::Failed {
                    path: delete,
                    error: e.to_string(),
                }
            }
        }
    }

    fn remove(&self, target: &Path, keep: &Path) -> Result<()> {
        if let Err(source) = fs::symlink_metadata(target) {
            return Err(match source.kind() {
                ErrorKind::NotFound => Error::FileAlreadyAbsent(target.to_path_buf()),
                _ => Error::Deletion {
                    path: target.to_path_buf(),
                    source,
                },
            });
        }

        self.safety.check_deletion(target, keep)?;

        fs::remove_file(target).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::FileAlreadyAbsent(target.to_path_buf()),
            _ => Error::Deletion {
                path: target.to_path_buf(),
                source,
            },
        })
    }
}

/// Resolve `pairs` with the resolver described by `config`
pub fn resolve(pairs: &[DuplicatePair], config: &Config) -> ResolutionSummary {
    Resolver::new(config).resolve(pairs)
}
