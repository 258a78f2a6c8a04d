//! Path utilities for FreeScribe resources and per-user data files.
//!
//! This module provides the canonical path resolution for the application:
//! - Read-only resources shipped alongside the code or inside a bundle
//! - Writable per-user files under the platform's user data directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Execution mode is injected, never probed from the runtime
//! - Host access goes through the `SystemDirs` port, platform conventions
//!   through the `UserDataDirProvider` trait

mod ensure;
mod error;
mod mode;
mod platform;
mod resolved;
mod resolver;
mod system;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Execution mode
pub use mode::{BUNDLE_ROOT_ENV, ExecutionMode};

// Platform conventions
pub use platform::{
    MACOS_APP_SUPPORT_RELATIVE, Platform, PlatformDataDir, UserDataDirProvider,
    XDG_DATA_HOME_DEFAULT_RELATIVE, XDG_DATA_HOME_ENV,
};
pub use system::{OsSystemDirs, SystemDirs};

// Directory operations
pub use ensure::{DirectoryStatus, ensure_directory};

// Resolution
pub use resolver::{APP_DIR_NAME, PathResolver, resolve_bundled_path, resolve_user_resource_path};

// Diagnostics snapshot
pub use resolved::ResolvedPaths;
