//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the skillgate binary in isolated projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

/// Returns a Command configured to run the skillgate binary
pub fn skillgate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("skillgate"));
    cmd.env_remove("SKILLGATE_CONFIG")
        .env_remove("SKILLGATE_EVENT")
        .env_remove("SKILLGATE_LOG");
    cmd
}

/// Repository root (two levels above the cli crate).
pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .to_path_buf()
}

/// Get path to a test fixture
pub fn fixture(name: &str) -> PathBuf {
    repo_root().join("tests").join("fixtures").join(name)
}

/// Temporary project directory, marked as a git root so discovery stops
/// inside it.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Project with no config (the built-in rule applies).
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// skillgate command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = skillgate_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
