//! libgit2-backed repository client.
//!
//! This module implements [`RepositoryClient`] and [`CachedRepository`] on top of the
//! `git2` library. Every `git2::Error` is mapped to the error variant of the step that
//! produced it, so callers can tell a broken cache from an unreachable remote.

use crate::core::{
    error::{Result, SchemaManagerError},
    repository::{CachedRepository, RemoteReference, RepositoryClient},
};
use git2::{Direction, Oid, Repository};
use std::path::Path;

/// Stateless entry point into libgit2
#[derive(Debug, Default, Clone, Copy)]
pub struct GitClient;

impl RepositoryClient for GitClient {
    type Repository = GitRepo;

    fn clone_repository(&self, url: &str, destination: &Path) -> Result<GitRepo> {
        log::debug!("Cloning {url} into {}", destination.display());
        let repo = Repository::clone(url, destination)
            .map_err(|e| SchemaManagerError::clone_failed(url, e))?;
        Ok(GitRepo { repo })
    }

    fn open(&self, path: &Path) -> Result<GitRepo> {
        GitRepo::open(path)
    }
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted at `path`. Parent directories are not searched, so a
    /// cache nested inside another working tree is never mistaken for it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|e| SchemaManagerError::open_failed(path, e))?;
        Ok(GitRepo { repo })
    }
}

impl CachedRepository for GitRepo {
    fn list_remote_refs(&self, remote: &str) -> Result<Vec<RemoteReference>> {
        let mut handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| SchemaManagerError::remote_not_found(remote, e))?;

        log::debug!(
            "Listing references of '{remote}' ({})",
            handle.url().unwrap_or("<non-utf8 url>")
        );
        handle
            .connect(Direction::Fetch)
            .map_err(|e| SchemaManagerError::remote_listing_failed(remote, e))?;

        let refs = handle
            .list()
            .map_err(|e| SchemaManagerError::remote_listing_failed(remote, e))?
            .iter()
            .map(|head| RemoteReference::new(head.name(), head.oid()))
            .collect::<Vec<_>>();

        log::debug!("Remote '{remote}' advertised {} references", refs.len());
        Ok(refs)
    }

    fn head(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(SchemaManagerError::Head)?;
        head.target().ok_or(SchemaManagerError::HeadWithoutCommit)
    }
}
