//! Test support utilities for pwbox integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// No process-global state is mutated: child processes get HOME and the
/// master password through their own environment, so tests can safely run
/// in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with records already added.
    ///
    /// Returns the environment and the ids in the order of `records`.
    pub fn with_records(records: &[(&str, &str, &str)]) -> (Self, Vec<String>) {
        let t = Self::new();
        let mut ids = Vec::new();
        for (category, account, password) in records {
            let output = t.add(category, account, password);
            assert!(
                output.status.success(),
                "Failed to add {}/{}: {}",
                category,
                account,
                String::from_utf8_lossy(&output.stderr)
            );
            ids.push(stdout(&output).trim().to_string());
        }
        (t, ids)
    }

    /// Default password box location under the temporary home.
    pub fn store_path(&self) -> PathBuf {
        self.home.path().join(".pwbox").join("passwords.json")
    }
}
