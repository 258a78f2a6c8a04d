//! Directory creation for the per-user application data directory.
//!
//! Creation is check-then-create and therefore not atomic. A concurrent
//! creator winning the race is not an error as long as a directory ends up
//! at the requested path.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use super::error::PathError;

/// Outcome of [`ensure_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// The directory was already present; nothing was written.
    Existing,
    /// The directory (and any missing parents) was created by this call.
    Created,
}

/// Ensure `path` exists as a directory, creating it and its parents if missing.
///
/// Fails with [`PathError::NotADirectory`] when something other than a
/// directory occupies `path`, and with [`PathError::CreateFailed`] (carrying
/// the OS error text) when creation fails.
pub fn ensure_directory(path: &Path) -> Result<DirectoryStatus, PathError> {
    if path.is_dir() {
        debug!(path = %path.display(), "Directory already exists");
        return Ok(DirectoryStatus::Existing);
    }
    if path.exists() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    match fs::create_dir_all(path) {
        Ok(()) => {
            info!(path = %path.display(), "Created application data directory");
            Ok(DirectoryStatus::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            warn!(path = %path.display(), "Directory appeared while creating it");
            Ok(DirectoryStatus::Existing)
        }
        Err(e) => Err(PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
