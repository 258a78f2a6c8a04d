//! Platform-specific user data directory lookup.
//!
//! Each supported host family knows where per-user application data lives.
//! The platform is picked once (normally via [`Platform::current`]) and
//! wrapped in a [`PlatformDataDir`], which the resolver only sees through
//! the [`UserDataDirProvider`] trait.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::error::PathError;
use super::system::{OsSystemDirs, SystemDirs};

/// Environment variable overriding the data base directory on Linux and similar hosts.
pub const XDG_DATA_HOME_ENV: &str = "XDG_DATA_HOME";

/// Fallback data directory relative to the home directory when `XDG_DATA_HOME` is blank.
pub const XDG_DATA_HOME_DEFAULT_RELATIVE: &str = ".local/share";

/// Per-user application data directory on macOS, relative to the home directory.
pub const MACOS_APP_SUPPORT_RELATIVE: &str = "Library/Application Support";

/// Host family, as far as data directory conventions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Roaming `AppData` folder from the shell.
    Windows,
    /// `~/Library/Application Support`.
    MacOs,
    /// XDG layout: `$XDG_DATA_HOME` or `~/.local/share`.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Resolve the base per-user data directory for this platform.
    ///
    /// The returned directory is not checked for existence and nothing is
    /// created. No application name is appended here.
    pub fn user_data_dir(self, system: &dyn SystemDirs) -> Result<PathBuf, PathError> {
        match self {
            Self::Windows => system.roaming_app_data_dir().ok_or(PathError::NoDataDir),
            Self::MacOs => Ok(home_dir(system)?.join(MACOS_APP_SUPPORT_RELATIVE)),
            Self::Other => match system.env_var(XDG_DATA_HOME_ENV) {
                Some(path) if !path.to_string_lossy().trim().is_empty() => {
                    Ok(PathBuf::from(path))
                }
                _ => Ok(home_dir(system)?.join(XDG_DATA_HOME_DEFAULT_RELATIVE)),
            },
        }
    }
}

/// Capability: locate the per-user data directory.
///
/// Implementations must be pure lookups; directory creation is the caller's job.
pub trait UserDataDirProvider: Send + Sync {
    fn user_data_dir(&self) -> Result<PathBuf, PathError>;
}

/// [`UserDataDirProvider`] that follows one platform's conventions.
pub struct PlatformDataDir {
    platform: Platform,
    system: Arc<dyn SystemDirs>,
}

impl PlatformDataDir {
    pub fn new(platform: Platform, system: Arc<dyn SystemDirs>) -> Self {
        Self { platform, system }
    }

    /// Conventions of the current host, queried through the real OS.
    pub fn detect() -> Self {
        Self::new(Platform::current(), Arc::new(OsSystemDirs))
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }
}

impl fmt::Debug for PlatformDataDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformDataDir")
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl UserDataDirProvider for PlatformDataDir {
    fn user_data_dir(&self) -> Result<PathBuf, PathError> {
        self.platform.user_data_dir(self.system.as_ref())
    }
}

fn home_dir(system: &dyn SystemDirs) -> Result<PathBuf, PathError> {
    system.home_dir().ok_or(PathError::NoHomeDir)
}

/// Make `path` absolute against `base` and fold `.` and `..` lexically.
///
/// Symlinks are not resolved and the filesystem is not touched.
pub(super) fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, like `..` at `/`.
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
