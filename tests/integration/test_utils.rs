//! Shared test utilities for integration tests
//!
//! Every CLI invocation gets its own HOME and XDG directories so that a
//! developer's real configuration never leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated home, config and data directories plus a workspace.
pub struct CliSandbox {
    pub dir: TempDir,
}

impl CliSandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for sub in ["home", "config", "data", "ws"] {
            std::fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        Self { dir }
    }

    pub fn workspace(&self) -> PathBuf {
        self.dir.path().join("ws")
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `rendstress --workspace <ws> <args...>` with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rendstress"));
        cmd.env("HOME", self.dir.path().join("home"))
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env("RENDSTRESS__GENERATOR__SCHEDULE_DELAY_MS", "0")
            .env_remove("RENDSTRESS_LOG")
            .env_remove("RENDSTRESS_LOG_FORMAT")
            .env_remove("RENDSTRESS_LOG_OUTPUT")
            .env_remove("RENDSTRESS_LOG_MODULES")
            .env_remove("RENDSTRESS_ENV")
            .arg("--workspace")
            .arg(self.workspace());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Stdout of a `generate` without `--output`: the payload, byte for byte.
pub fn payload_of(output: &Output) -> String {
    stdout_of(output)
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
