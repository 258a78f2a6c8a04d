//! Operating-system directory port.
//!
//! Everything the resolver needs from the host (home directory, the Windows
//! roaming application-data folder, environment variables and the working
//! directory) goes through [`SystemDirs`], so resolution logic can run
//! against a fake host in tests.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// Port for querying host directories and environment.
pub trait SystemDirs: Send + Sync {
    /// The invoking user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The per-user roaming "Application Data" folder.
    ///
    /// Only meaningful on Windows; other hosts return `None`.
    fn roaming_app_data_dir(&self) -> Option<PathBuf>;

    /// Read an environment variable; unset values are `None`.
    ///
    /// Values are returned as-is, including ones that are not valid unicode.
    fn env_var(&self, key: &str) -> Option<OsString>;

    /// The process working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// [`SystemDirs`] backed by the real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSystemDirs;

impl SystemDirs for OsSystemDirs {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn roaming_app_data_dir(&self) -> Option<PathBuf> {
        // FOLDERID_RoamingAppData, the folder CSIDL_APPDATA points at.
        #[cfg(target_os = "windows")]
        {
            dirs::data_dir()
        }

        #[cfg(not(target_os = "windows"))]
        {
            None
        }
    }

    fn env_var(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }
}
