//! Version-control capabilities consumed by the workflows.
//!
//! The workflows only ever clone, open, list the references of a remote and read
//! HEAD. Those four capabilities are expressed as the [`RepositoryClient`] and
//! [`CachedRepository`] traits so the workflows can run against libgit2
//! ([`crate::core::git::GitClient`]) or an in-memory double in tests.

use crate::core::error::Result;
use git2::Oid;
use std::path::Path;

/// Remote that the cache is compared against
pub const ORIGIN: &str = "origin";

/// Branch whose tip is considered the published state of the schemas
pub const MAIN_BRANCH: &str = "main";

const BRANCH_PREFIX: &str = "refs/heads/";

/// Entry point to a version-control implementation
pub trait RepositoryClient {
    type Repository: CachedRepository;

    /// Clone `url` into `destination`, which must be absent or empty
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<Self::Repository>;

    /// Open the working tree at exactly `path`
    fn open(&self, path: &Path) -> Result<Self::Repository>;
}

/// A repository present on local disk
pub trait CachedRepository {
    /// Resolve the remote called `remote` and list the references it advertises.
    ///
    /// An unknown remote is a version-control error; failing to reach it is a
    /// network error.
    fn list_remote_refs(&self, remote: &str) -> Result<Vec<RemoteReference>>;

    /// Commit currently checked out
    fn head(&self) -> Result<Oid>;
}

/// A reference advertised by a remote, e.g. `refs/heads/main`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReference {
    pub name: String,
    pub id: Oid,
}

impl RemoteReference {
    pub fn new(name: impl Into<String>, id: Oid) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Short branch name, or `None` for tags, HEAD and other non-branch references
    pub fn branch_name(&self) -> Option<&str> {
        self.name.strip_prefix(BRANCH_PREFIX)
    }
}

/// Commit id of the first advertised branch called `branch`
pub fn find_branch(refs: &[RemoteReference], branch: &str) -> Option<Oid> {
    refs.iter()
        .find(|reference| reference.branch_name() == Some(branch))
        .map(|reference| reference.id)
}

/// First eight hex characters of a commit id
pub fn short_id(id: Oid) -> String {
    let mut hex = id.to_string();
    hex.truncate(8);
    hex
}
