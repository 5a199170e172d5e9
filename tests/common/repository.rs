//! Temporary home directories and git repository helpers
//!
//! Provides an isolated `$HOME` for each test plus functions for building upstream
//! repositories with the `git` command line.

#![allow(dead_code)]

use anyhow::{bail, Result};
use assert_cmd::prelude::*;
use schema_manager::core::dirs::cache_directory_in;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// An isolated home directory. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestHome {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        Ok(Self { temp_dir, path })
    }

    /// `<home>/.opencmd/commands`
    pub fn cache_dir(&self) -> PathBuf {
        cache_directory_in(&self.path)
    }

    /// The schema-manager binary running against this home
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("schema-manager")?;
        cmd.env("HOME", &self.path).env("NO_COLOR", "1");
        Ok(cmd)
    }
}

/// Runs a git command and fails the test if git reports an error
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Writes `content` to `relative` below `root`, creating parent directories
pub fn create_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates a repository on branch `main` whose first commit holds `files`
pub fn setup_upstream_repo(files: &[&str]) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path();

    git(path, &["init"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    for file in files {
        create_file(path, file, "command {}\n")?;
    }
    git(path, &["add", "."])?;
    git(path, &["commit", "-m", "Initial commit"])?;
    git(path, &["branch", "-M", "main"])?;

    Ok(temp_dir)
}

/// Adds a commit to `repo_path` and returns its full id
pub fn commit_file(repo_path: &Path, relative: &str) -> Result<String> {
    create_file(repo_path, relative, "command updated {}\n")?;
    git(repo_path, &["add", "."])?;
    let message = format!("Add {relative}");
    git(repo_path, &["commit", "-m", message.as_str()])?;
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Clones `upstream` into the cache of `home` the way `init` would
pub fn clone_into_cache(home: &TestHome, upstream: &Path) -> Result<()> {
    let cache_dir = home.cache_dir();
    fs::create_dir_all(&cache_dir)?;
    let source = upstream.to_string_lossy().into_owned();
    git(&cache_dir, &["clone", source.as_str(), "."])?;
    Ok(())
}
