use std::path::Path;

use crate::error::{Error, Result};

/// Guards destructive operations on duplicate pairs
#[derive(Debug, Default, Clone, Copy)]
pub struct SafetyManager;

impl SafetyManager {
    pub fn new() -> Self {
        Self
    }

    /// Reject pairs that could never be valid deletions
    pub fn check_deletion(&self, target: &Path, keep: &Path) -> Result<()> {
        if target == keep {
            return Err(Error::SafetyCheck(format!(
                "{} is paired with itself",
                target.display()
            )));
        }

        if target.is_dir() {
            return Err(Error::SafetyCheck(format!(
                "{} is a directory",
                target.display()
            )));
        }

        Ok(())
    }
}
