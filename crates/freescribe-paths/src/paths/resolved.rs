//! Snapshot of every resolved location, for diagnostics.
//!
//! Backs the `freescribe-paths paths` command and the integration tests
//! that compare resolution across calls.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::{ExecutionMode, PathError, PathResolver};

/// All resolved paths captured in a single struct.
///
/// Building a snapshot never creates directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    /// How the process is running.
    pub mode: ExecutionMode,
    /// Base directory for bundled read-only resources.
    pub base_dir: PathBuf,
    /// Platform per-user data directory.
    pub user_data_dir: PathBuf,
    /// Application subdirectory that holds writable per-user files in bundled mode.
    pub app_data_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using `resolver`.
    pub fn resolve(resolver: &PathResolver) -> Result<Self, PathError> {
        let base_dir = resolver.base_dir()?;
        let user_data_dir = resolver.user_data_dir()?;
        let app_data_dir = resolver.app_data_dir()?;

        Ok(Self {
            mode: resolver.mode().clone(),
            base_dir,
            user_data_dir,
            app_data_dir,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode = {}", self.mode)?;
        writeln!(f, "base_dir = {}", self.base_dir.display())?;
        writeln!(f, "user_data_dir = {}", self.user_data_dir.display())?;
        write!(f, "app_data_dir = {}", self.app_data_dir.display())
    }
}
