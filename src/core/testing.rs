//! In-memory repository client for workflow tests.

use crate::core::{
    error::{Result, SchemaManagerError},
    repository::{CachedRepository, RemoteReference, RepositoryClient},
};
use git2::Oid;
use std::cell::Cell;
use std::path::Path;

/// File written into the destination by every fake clone
pub const CLONED_MARKER: &str = "cloned.hl";

pub fn oid(hex: &str) -> Oid {
    Oid::from_str(hex).unwrap()
}

/// Records how often each capability was used and answers with canned data
#[derive(Debug, Default)]
pub struct FakeClient {
    pub head: Option<Oid>,
    pub refs: Vec<RemoteReference>,
    pub unreachable: bool,
    pub clones: Cell<usize>,
    pub opens: Cell<usize>,
}

impl FakeClient {
    pub fn with_remote(head: Oid, refs: Vec<RemoteReference>) -> Self {
        Self {
            head: Some(head),
            refs,
            ..Self::default()
        }
    }
}

impl RepositoryClient for FakeClient {
    type Repository = FakeRepo;

    fn clone_repository(&self, _url: &str, destination: &Path) -> Result<FakeRepo> {
        self.clones.set(self.clones.get() + 1);
        std::fs::write(destination.join(CLONED_MARKER), "command fake {}\n")?;
        self.open(destination)
    }

    fn open(&self, _path: &Path) -> Result<FakeRepo> {
        self.opens.set(self.opens.get() + 1);
        Ok(FakeRepo {
            head: self.head,
            refs: self.refs.clone(),
            unreachable: self.unreachable,
        })
    }
}

pub struct FakeRepo {
    head: Option<Oid>,
    refs: Vec<RemoteReference>,
    unreachable: bool,
}

impl CachedRepository for FakeRepo {
    fn list_remote_refs(&self, remote: &str) -> Result<Vec<RemoteReference>> {
        if self.unreachable {
            return Err(SchemaManagerError::remote_listing_failed(
                remote,
                git2::Error::from_str("failed to connect"),
            ));
        }
        Ok(self.refs.clone())
    }

    fn head(&self) -> Result<Oid> {
        self.head.ok_or(SchemaManagerError::HeadWithoutCommit)
    }
}
