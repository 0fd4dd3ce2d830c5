//! Common test utilities for CLI integration tests.
//!
//! Every test runs the binary against its own installation and home
//! directories so nothing on the host machine leaks in.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated installation and home directories.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Installation directory (contains `conf/`).
    pub install_dir: PathBuf,
    /// Home directory.
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates empty installation and home directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let install_dir = temp_dir.path().join("install");
        let home_dir = temp_dir.path().join("home");
        fs::create_dir_all(install_dir.join("conf")).expect("Failed to create conf dir");
        fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            install_dir,
            home_dir,
        }
    }

    /// The binary with no flags and a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("conflib").expect("Failed to find conflib binary");
        cmd.env_remove("CODERRECT_HOME")
            .env_remove("CONFLIB_LOG_MODE");
        cmd
    }

    /// The binary pointed at this environment's directories.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--install-dir")
            .arg(&self.install_dir)
            .arg("--home-dir")
            .arg(&self.home_dir);
        cmd
    }

    /// Writes the installation default file.
    pub fn write_default(&self, content: &str) -> PathBuf {
        let path = self.install_dir.join("conf").join("coderrect.json");
        fs::write(&path, content).expect("Failed to write default config");
        path
    }

    /// Writes `~/.coderrect.json`.
    pub fn write_home_custom(&self, content: &str) -> PathBuf {
        let path = self.home_dir.join(".coderrect.json");
        fs::write(&path, content).expect("Failed to write custom config");
        path
    }

    /// Writes a file at the top of the temporary directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
