//! Test support utilities for keyfob integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated — child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    ///
    /// Sets up temporary directories for project and home.
    /// Does NOT change the process working directory — child commands
    /// use `.current_dir()` for isolation instead.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with the given key.properties contents.
    pub fn with_properties(contents: &str) -> Self {
        let t = Self::new();
        t.write_properties(contents);
        t
    }

    /// Create a test environment with a complete, valid key.properties.
    pub fn with_valid_config() -> Self {
        Self::with_properties(fixtures::VALID_PROPERTIES)
    }

    /// Create a test environment initialized through `keyfob init`.
    pub fn initialized() -> Self {
        let t = Self::new();
        let output = t.init_default();
        assert!(
            output.status.success(),
            "Failed to initialize: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Write key.properties in the project dir.
    pub fn write_properties(&self, contents: &str) {
        fs::write(self.properties_path(), contents).expect("failed to write key.properties");
    }

    /// Write a fake keystore file in the project dir.
    pub fn write_keystore(&self, name: &str) {
        fs::write(self.dir.path().join(name), fixtures::JKS_MAGIC)
            .expect("failed to write keystore");
    }

    /// Path of the project's key.properties.
    pub fn properties_path(&self) -> PathBuf {
        self.dir.path().join("key.properties")
    }
}
