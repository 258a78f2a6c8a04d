//! Execution mode detection.
//!
//! The application either runs from a source checkout or from a packaged
//! bundle that unpacks its read-only resources into an extraction directory.
//! The mode is decided once at startup and handed to [`PathResolver`].
//!
//! [`PathResolver`]: super::PathResolver

use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Environment variable a bundle launcher sets to its extraction directory.
pub const BUNDLE_ROOT_ENV: &str = "FREESCRIBE_BUNDLE_ROOT";

/// Whether the process runs from source or from a packaged bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Running from a source checkout; paths resolve against the working directory.
    #[default]
    Source,
    /// Running as a packaged executable.
    Bundled {
        /// Directory the bundle extracted its resources into.
        bundle_root: PathBuf,
    },
}

impl ExecutionMode {
    /// Bundled mode rooted at `bundle_root`.
    pub fn bundled(bundle_root: impl Into<PathBuf>) -> Self {
        Self::Bundled {
            bundle_root: bundle_root.into(),
        }
    }

    /// Read the mode from `FREESCRIBE_BUNDLE_ROOT`.
    ///
    /// A non-blank value selects bundled mode rooted at that directory;
    /// anything else means the process runs from source.
    pub fn from_env() -> Self {
        Self::from_bundle_root(env::var_os(BUNDLE_ROOT_ENV).as_deref())
    }

    /// Build the mode from an optional bundle root.
    ///
    /// Blank and whitespace-only values are treated as absent. Unicode values
    /// are trimmed; anything else is used verbatim.
    pub fn from_bundle_root(raw: Option<&OsStr>) -> Self {
        match raw {
            Some(root) if !root.to_string_lossy().trim().is_empty() => {
                root.to_str().map_or_else(|| Self::bundled(root), |s| Self::bundled(s.trim()))
            }
            _ => Self::Source,
        }
    }

    pub const fn is_bundled(&self) -> bool {
        matches!(self, Self::Bundled { .. })
    }

    /// The bundle extraction directory, if bundled.
    pub fn bundle_root(&self) -> Option<&Path> {
        match self {
            Self::Bundled { bundle_root } => Some(bundle_root.as_path()),
            Self::Source => None,
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Bundled { .. } => f.write_str("bundled"),
        }
    }
}
