//! Resource and per-user data path resolution for the FreeScribe client.
//!
//! ```no_run
//! use freescribe_paths::PathResolver;
//!
//! let resolver = PathResolver::from_env();
//! let logo = resolver.resolve_bundled_path(["assets", "logo.png"])?;
//! let settings = resolver.resolve_user_resource_path("settings.txt")?;
//! # Ok::<(), freescribe_paths::PathError>(())
//! ```

#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    APP_DIR_NAME, BUNDLE_ROOT_ENV, DirectoryStatus, ExecutionMode, OsSystemDirs, PathError,
    PathResolver, Platform, PlatformDataDir, ResolvedPaths, SystemDirs, UserDataDirProvider,
    ensure_directory, resolve_bundled_path, resolve_user_resource_path,
};
