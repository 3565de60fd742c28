//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary home directory
//! - Configuration file fixtures
//! - Fake `fzf` and `tmux` programs for end-to-end runs

use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Every command runs with `HOME` pointing at the temporary directory, so
/// `~` in configuration and output refers to it.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary home directory
    pub home: PathBuf,
    /// Directory holding fake programs, put first on `PATH`
    pub bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty home directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        Self {
            temp_dir,
            home,
            bin_dir,
        }
    }

    /// Get a command builder for `ts` running in this environment.
    ///
    /// Only the fake bin directory and the system directories needed by the
    /// fake programs are on `PATH`, so the real fzf and tmux are never used.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ts").expect("Failed to find ts binary");
        cmd.env("HOME", &self.home)
            .env("PATH", format!("{}:/usr/bin:/bin", self.bin_dir.display()))
            .env_remove("TS_CONFIG")
            .env_remove("TS_LOG_MODE")
            .env_remove("TMUX");
        cmd
    }

    /// Create a directory under home and return its path.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.home.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file under home and return its path.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.home.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write a JSON config at the default location.
    pub fn write_default_config(&self, json: &str) -> PathBuf {
        self.write_file(".config/ts/config.json", json)
    }

    /// Write a default config listing `(path, depth)` targets.
    pub fn write_targets(&self, targets: &[(&str, u8)]) -> PathBuf {
        let targets: Vec<_> = targets
            .iter()
            .map(|(path, depth)| json!({ "path": path, "depth": depth }))
            .collect();
        self.write_default_config(&json!({ "targets": targets }).to_string())
    }

    /// ~/code/{api,web} configured as `~/code` with depth 1.
    pub fn with_code_projects(&self) {
        self.create_dir("code/api");
        self.create_dir("code/web");
        self.write_targets(&[("~/code", 1)]);
    }

    /// Install an executable shell script as `name` in the fake bin directory.
    #[cfg(unix)]
    pub fn install_program(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write program");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make program executable");
        path
    }

    /// Install a fake tmux that logs its arguments to `tmux.log` and reports
    /// no existing sessions.
    #[cfg(unix)]
    pub fn install_fake_tmux(&self) -> PathBuf {
        let log = self.bin_dir.join("tmux.log");
        self.install_program(
            "tmux",
            &format!(
                "echo \"$@\" >> '{}'\ncase \"$1\" in has-session) exit 1;; esac\nexit 0",
                log.display()
            ),
        );
        log
    }

    /// Lines logged by the fake tmux.
    pub fn tmux_calls(&self) -> Vec<String> {
        fs::read_to_string(self.bin_dir.join("tmux.log"))
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Absolute path of something under home.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.home.join(rel)
    }

    /// The home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Run `ts -l` with extra arguments and return stdout.
    pub fn list(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("-l")
            .args(args)
            .output()
            .expect("Failed to run ts -l");

        assert!(
            output.status.success(),
            "ts -l failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
