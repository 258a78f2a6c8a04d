//! Path resolution for bundled resources and per-user data files.
//!
//! [`PathResolver`] is built once at startup from an [`ExecutionMode`], a
//! [`UserDataDirProvider`] and a [`SystemDirs`] host. Every call recomputes
//! its answer; nothing is cached between calls.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::ensure::ensure_directory;
use super::error::PathError;
use super::mode::ExecutionMode;
use super::platform::{PlatformDataDir, UserDataDirProvider, absolutize};
use super::system::{OsSystemDirs, SystemDirs};

/// Name of the application subdirectory inside the user data directory.
pub const APP_DIR_NAME: &str = "FreeScribe";

/// Resolves resource and user data paths for one execution mode.
pub struct PathResolver {
    mode: ExecutionMode,
    data_dir: Arc<dyn UserDataDirProvider>,
    system: Arc<dyn SystemDirs>,
}

impl PathResolver {
    pub fn new(
        mode: ExecutionMode,
        data_dir: Arc<dyn UserDataDirProvider>,
        system: Arc<dyn SystemDirs>,
    ) -> Self {
        Self {
            mode,
            data_dir,
            system,
        }
    }

    /// Resolver for `mode` on the real host with the current platform's conventions.
    pub fn with_mode(mode: ExecutionMode) -> Self {
        Self::new(mode, Arc::new(PlatformDataDir::detect()), Arc::new(OsSystemDirs))
    }

    /// Resolver for the real host, with the mode read from `FREESCRIBE_BUNDLE_ROOT`.
    pub fn from_env() -> Self {
        Self::with_mode(ExecutionMode::from_env())
    }

    pub const fn mode(&self) -> &ExecutionMode {
        &self.mode
    }

    /// Base directory for read-only resources.
    ///
    /// The bundle extraction directory when bundled, otherwise the absolute
    /// working directory.
    pub fn base_dir(&self) -> Result<PathBuf, PathError> {
        match &self.mode {
            ExecutionMode::Bundled { bundle_root } => Ok(bundle_root.clone()),
            ExecutionMode::Source => self.current_dir(),
        }
    }

    /// Locate a read-only resource shipped with the application.
    ///
    /// Joins [`base_dir`](Self::base_dir) with every segment in order. Pure
    /// path computation: no filesystem writes and no existence checks.
    pub fn resolve_bundled_path<I, S>(&self, segments: I) -> Result<PathBuf, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut segments = segments.into_iter().peekable();
        if segments.peek().is_none() {
            return Err(PathError::EmptyPath);
        }

        let mut path = self.base_dir()?;
        for segment in segments {
            path.push(segment);
        }
        Ok(path)
    }

    /// Locate a writable per-user file.
    ///
    /// When bundled, the file lives in `<user data dir>/FreeScribe/`, which is
    /// created on first use. From source, `filename` is made absolute against
    /// the working directory and nothing is created.
    pub fn resolve_user_resource_path(
        &self,
        filename: impl AsRef<Path>,
    ) -> Result<PathBuf, PathError> {
        let filename = filename.as_ref();
        if filename.as_os_str().is_empty() {
            return Err(PathError::EmptyPath);
        }

        match &self.mode {
            ExecutionMode::Bundled { .. } => {
                let app_dir = self.app_data_dir()?;
                ensure_directory(&app_dir)?;
                Ok(app_dir.join(filename))
            }
            ExecutionMode::Source => Ok(absolutize(&self.current_dir()?, filename)),
        }
    }

    /// The application's subdirectory of the user data directory.
    ///
    /// Only computed; use [`resolve_user_resource_path`](Self::resolve_user_resource_path)
    /// to have it created.
    pub fn app_data_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.user_data_dir()?.join(APP_DIR_NAME))
    }

    pub(crate) fn user_data_dir(&self) -> Result<PathBuf, PathError> {
        let dir = self.data_dir.user_data_dir()?;
        debug!(path = %dir.display(), "Resolved user data directory");
        Ok(dir)
    }

    fn current_dir(&self) -> Result<PathBuf, PathError> {
        self.system
            .current_dir()
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// [`PathResolver::resolve_bundled_path`] on the real host, mode from the environment.
pub fn resolve_bundled_path<I, S>(segments: I) -> Result<PathBuf, PathError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    PathResolver::from_env().resolve_bundled_path(segments)
}

/// [`PathResolver::resolve_user_resource_path`] on the real host, mode from the environment.
pub fn resolve_user_resource_path(filename: impl AsRef<Path>) -> Result<PathBuf, PathError> {
    PathResolver::from_env().resolve_user_resource_path(filename)
}
