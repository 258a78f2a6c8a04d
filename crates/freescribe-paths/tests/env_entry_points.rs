//! Tests for the free functions that read the execution mode from
//! `FREESCRIBE_BUNDLE_ROOT` and resolve against the real host.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::sync::Mutex;

use freescribe_paths::{
    APP_DIR_NAME, BUNDLE_ROOT_ENV, resolve_bundled_path, resolve_user_resource_path,
};

/// Serializes tests in this binary that touch the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores an environment variable to its original value on drop.
struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    #[allow(unsafe_code)]
    fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self { key, previous }
    }

    #[allow(unsafe_code)]
    fn unset(key: &'static str) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(self.key);
            }
        }
    }
}

#[test]
fn bundled_path_uses_bundle_root_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    let _env = EnvGuard::set(BUNDLE_ROOT_ENV, "/opt/freescribe/_internal");

    let path = resolve_bundled_path(["a", "b"]).expect("bundled path");
    assert_eq!(path, Path::new("/opt/freescribe/_internal").join("a").join("b"));
}

#[test]
fn bundled_path_without_env_uses_working_directory() {
    let _guard = ENV_LOCK.lock().unwrap();
    let _env = EnvGuard::unset(BUNDLE_ROOT_ENV);

    let path = resolve_bundled_path(["assets", "logo.png"]).expect("bundled path");
    let cwd = env::current_dir().expect("current dir");
    assert_eq!(path, cwd.join("assets").join("logo.png"));
}

#[test]
fn resource_path_without_env_is_relative_to_working_directory() {
    let _guard = ENV_LOCK.lock().unwrap();
    let _env = EnvGuard::unset(BUNDLE_ROOT_ENV);

    let filename = format!("freescribe-entry-point-{}.txt", std::process::id());
    let cwd = env::current_dir().expect("current dir");
    let expected = cwd.join(&filename);
    let app_dir_existed = cwd.join(APP_DIR_NAME).exists();

    let path = resolve_user_resource_path(&filename).expect("resource path");
    assert_eq!(path, expected);
    assert!(!expected.exists());
    assert_eq!(cwd.join(APP_DIR_NAME).exists(), app_dir_existed);
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn resource_path_with_env_lands_under_xdg_data_home() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp = tempfile::tempdir().unwrap();
    let _bundle = EnvGuard::set(BUNDLE_ROOT_ENV, "/opt/freescribe/_internal");
    let _xdg = EnvGuard::set("XDG_DATA_HOME", temp.path());

    let first = resolve_user_resource_path("settings.txt").expect("resource path");
    assert_eq!(first, temp.path().join(APP_DIR_NAME).join("settings.txt"));
    assert!(temp.path().join(APP_DIR_NAME).is_dir());

    let second = resolve_user_resource_path("settings.txt").expect("resource path");
    assert_eq!(first, second);
}
