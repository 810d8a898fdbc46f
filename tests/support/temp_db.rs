use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Throwaway working directory holding a SQLite database for one test.
///
/// Commands built from it run inside the directory, so no stray
/// `rollbook.toml` or `.env` from the repository is picked up.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("college.db");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// `rollbook` with no database selection, running in the temp directory.
    pub fn bare(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rollbook");
        cmd.current_dir(self.dir.path())
            .env_remove("ROLLBOOK_DATABASE")
            .env_remove("RUST_LOG")
            .args(["--color", "never"]);
        cmd
    }

    /// `rollbook --database <temp db>`.
    pub fn rollbook(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--database").arg(&self.path);
        cmd
    }

    /// Run `rollbook add` and require success.
    pub fn add(&self, roll: i32, name: &str, marks: i32) {
        self.rollbook()
            .args(["add", &roll.to_string(), name, &marks.to_string()])
            .assert()
            .success();
    }
}
