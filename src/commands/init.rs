use crate::core::{
    config::CacheConfig,
    error::{Result, SchemaManagerError},
    git::GitClient,
    print_hint, print_info, print_success,
    repository::RepositoryClient,
};
use std::fs;

/// What `init` did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The cache already existed and `--force` was not given
    AlreadyPresent,
    /// A fresh clone was made; `replaced` is set when an old cache was removed first
    Cloned { replaced: bool },
}

pub fn execute_init(config: &CacheConfig, force: bool) -> Result<()> {
    init_repository(config, &GitClient, force).map(|_| ())
}

/// Clone the remote into the cache, optionally wiping an existing cache first
pub fn init_repository<C: RepositoryClient>(
    config: &CacheConfig,
    client: &C,
    force: bool,
) -> Result<InitOutcome> {
    let cache_dir = config.cache_dir();
    let mut replaced = false;

    if force && config.cache_exists() {
        log::debug!("Removing {} before re-cloning", cache_dir.display());
        fs::remove_dir_all(cache_dir)
            .map_err(|e| SchemaManagerError::cache_directory_removal_failed(cache_dir, e))?;
        print_info("Removed existing cache directory.");
        replaced = true;
    }

    if config.cache_exists() {
        print_info(&format!("Repository already exists at: {}", cache_dir.display()));
        print_hint("Use -f flag to force re-clone.");
        return Ok(InitOutcome::AlreadyPresent);
    }

    fs::create_dir_all(cache_dir)
        .map_err(|e| SchemaManagerError::cache_directory_creation_failed(cache_dir, e))?;

    print_info(&format!("Cloning repository to: {}", cache_dir.display()));
    client.clone_repository(&config.remote_url, cache_dir)?;
    print_success("Repository cloned successfully!");

    Ok(InitOutcome::Cloned { replaced })
}
