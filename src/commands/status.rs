use crate::commands::NOT_INITIALIZED;
use crate::core::{
    config::CacheConfig,
    error::Result,
    git::GitClient,
    print_detail, print_hint, print_info, print_success, print_warning,
    repository::{find_branch, short_id, CachedRepository, RepositoryClient, MAIN_BRANCH, ORIGIN},
};
use git2::Oid;

/// How the cached checkout relates to the remote `main` branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    NotInitialized,
    MainBranchMissing,
    UpToDate,
    Behind { local: Oid, remote: Oid },
}

pub fn execute_status(config: &CacheConfig) -> Result<()> {
    let status = check_status(config, &GitClient)?;
    report_status(status);
    Ok(())
}

/// Compare the cache HEAD with the tip of `main` advertised by `origin`
pub fn check_status<C: RepositoryClient>(config: &CacheConfig, client: &C) -> Result<SyncStatus> {
    if !config.cache_exists() {
        return Ok(SyncStatus::NotInitialized);
    }

    let repo = client.open(config.cache_dir())?;
    let refs = repo.list_remote_refs(ORIGIN)?;
    let local = repo.head()?;

    let Some(remote) = find_branch(&refs, MAIN_BRANCH) else {
        log::warn!("'{ORIGIN}' advertised {} refs, none is {MAIN_BRANCH}", refs.len());
        return Ok(SyncStatus::MainBranchMissing);
    };

    log::debug!("Local HEAD {local}, remote {MAIN_BRANCH} {remote}");
    if local == remote {
        Ok(SyncStatus::UpToDate)
    } else {
        Ok(SyncStatus::Behind { local, remote })
    }
}

pub fn report_status(status: SyncStatus) {
    match status {
        SyncStatus::NotInitialized => print_info(NOT_INITIALIZED),
        SyncStatus::MainBranchMissing => print_info("Could not find remote main branch."),
        SyncStatus::UpToDate => print_success("Local repository is up to date with remote."),
        SyncStatus::Behind { local, remote } => {
            print_warning("Local repository is behind remote.");
            print_detail("Local HEAD: ", &short_id(local));
            print_detail("Remote main:", &short_id(remote));
            print_hint("Run 'schema-manager init -f' to update.");
        }
    }
}
