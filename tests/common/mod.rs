//! Common test utilities for Aide integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Instructions file path used by default
pub const INSTRUCTIONS: &str = ".github/aide-instructions.md";

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command for the aide binary, running inside this workspace
    pub fn aide(&self) -> Command {
        let mut cmd = aide_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

/// Command for the aide binary with developer overrides removed
#[allow(deprecated)]
pub fn aide_cmd() -> Command {
    let mut cmd = Command::cargo_bin("aide").expect("aide binary should be built");
    // Always ignore any developer AIDE_WORKSPACE / RUST_LOG overrides during tests
    cmd.env_remove("AIDE_WORKSPACE");
    cmd.env_remove("RUST_LOG");
    cmd
}
