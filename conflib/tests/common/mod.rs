//! Common test utilities for integration tests.
//!
//! This module provides a throwaway installation layout (an installation
//! directory with `conf/` and a home directory) and an environment variable
//! guard.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use conflib::LoaderOptions;
use tempfile::TempDir;

/// A temporary installation directory and home directory.
pub struct Installation {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl Installation {
    /// Creates empty `install/` and `home/` directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("install").join("conf")).unwrap();
        fs::create_dir_all(temp_dir.path().join("home")).unwrap();
        Self { temp_dir }
    }

    /// The installation directory (`CODERRECT_HOME`).
    pub fn install_dir(&self) -> PathBuf {
        self.temp_dir.path().join("install")
    }

    /// The home directory.
    pub fn home_dir(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Loader options pointing at this layout.
    pub fn options(&self) -> LoaderOptions {
        LoaderOptions::new()
            .with_install_dir(self.install_dir())
            .with_home_dir(self.home_dir())
    }

    /// Writes `conf/coderrect.json` under the installation directory.
    pub fn write_default(&self, content: &str) -> PathBuf {
        let path = self.install_dir().join("conf").join("coderrect.json");
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes `~/.coderrect.json` in the home directory.
    pub fn write_home_custom(&self, content: &str) -> PathBuf {
        let path = self.home_dir().join(".coderrect.json");
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes an arbitrary file at the top of the temporary directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
pub struct EnvGuard {
    key: String,
    old_value: Option<OsString>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard drops.
    pub fn new(key: &str, value: impl AsRef<OsStr>) -> Self {
        let old_value = env::var_os(key);
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var_os(key);
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
