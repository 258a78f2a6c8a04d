//! Test utilities for path tests.
//!
//! Provides a fake host for [`SystemDirs`] plus synchronization for the few
//! tests that must touch real process environment variables.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use super::error::PathError;
use super::platform::UserDataDirProvider;
use super::system::SystemDirs;

/// Shared lock to serialize tests that read or write environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    pub fn set(key: &str, value: &str) -> Self {
        Self::set_os(key, OsStr::new(value))
    }

    /// Like [`EnvVarGuard::set`], for values that need not be valid unicode.
    #[allow(unsafe_code)]
    pub fn set_os(key: &str, value: &OsStr) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}

/// In-memory host with configurable directories and environment.
#[derive(Debug, Default)]
pub struct FakeSystemDirs {
    home: Option<PathBuf>,
    roaming_app_data: Option<PathBuf>,
    vars: HashMap<String, OsString>,
    cwd: Option<PathBuf>,
}

impl FakeSystemDirs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: PathBuf) -> Self {
        self.home = Some(home);
        self
    }

    pub fn with_roaming_app_data(mut self, dir: PathBuf) -> Self {
        self.roaming_app_data = Some(dir);
        self
    }

    pub fn with_env(self, key: &str, value: &str) -> Self {
        self.with_env_os(key, OsString::from(value))
    }

    pub fn with_env_os(mut self, key: &str, value: OsString) -> Self {
        self.vars.insert(key.to_string(), value);
        self
    }

    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }
}

impl SystemDirs for FakeSystemDirs {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn roaming_app_data_dir(&self) -> Option<PathBuf> {
        self.roaming_app_data.clone()
    }

    fn env_var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "working directory removed"))
    }
}

/// Provider that always answers with the same directory.
#[derive(Debug)]
pub struct FixedDataDir(pub PathBuf);

impl UserDataDirProvider for FixedDataDir {
    fn user_data_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.0.clone())
    }
}
