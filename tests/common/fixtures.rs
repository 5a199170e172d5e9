//! Predefined cache layouts shared by the list and search tests

#![allow(dead_code)]

use super::repository::*;
use anyhow::Result;

/// Scenario: cache holding `a/b.hl`, `a/c.txt` and `d.hl`
pub fn create_sample_cache() -> Result<TestHome> {
    let home = TestHome::new()?;
    let cache_dir = home.cache_dir();

    create_file(&cache_dir, "a/b.hl", "command b {}\n")?;
    create_file(&cache_dir, "a/c.txt", "not a schema\n")?;
    create_file(&cache_dir, "d.hl", "command d {}\n")?;

    Ok(home)
}

/// Scenario: cache cloned from a fresh upstream that is still on the same commit
pub fn create_synced_cache() -> Result<(TestHome, tempfile::TempDir)> {
    let upstream = setup_upstream_repo(&["git/commit.hl", "ls.hl"])?;
    let home = TestHome::new()?;
    clone_into_cache(&home, upstream.path())?;
    Ok((home, upstream))
}
