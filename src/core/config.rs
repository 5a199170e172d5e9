use crate::core::dirs::get_cache_directory;
use crate::core::error::Result;
use std::path::{Path, PathBuf};

/// Repository the schema cache is cloned from
pub const REMOTE_URL: &str = "https://github.com/opencommand/commands";

/// Where the cache lives and what it mirrors.
///
/// Computed once at startup and handed to every workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub cache_dir: PathBuf,
    pub remote_url: String,
}

impl CacheConfig {
    pub fn new(cache_dir: impl Into<PathBuf>, remote_url: impl Into<String>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            remote_url: remote_url.into(),
        }
    }

    /// `<home>/.opencmd/commands` mirroring [`REMOTE_URL`]
    pub fn from_home() -> Result<Self> {
        Ok(Self::new(get_cache_directory()?, REMOTE_URL))
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Existence only. A directory that is not a valid working tree still counts.
    pub fn cache_exists(&self) -> bool {
        self.cache_dir.exists()
    }
}
