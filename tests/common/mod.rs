//! Common test utilities for showrunner integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't read or
//! pollute the user's `~/.config/showrunner/` directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
pub use tempfile::TempDir;

/// A test environment with an isolated config directory.
///
/// The `sr()` method returns a `Command` that sets `SR_CONFIG_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub config_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated config directory.
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the sr binary with isolated config directory.
    pub fn sr(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sr"));
        cmd.env("SR_CONFIG_DIR", self.config_dir.path());
        cmd
    }

    /// Get the path of config.kdl inside the isolated directory.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.kdl")
    }

    /// Write config.kdl content into the isolated directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
