//! Recursive discovery of schema files in the cache.
//!
//! [`SchemaFiles`] walks a directory tree lazily and yields the path of every regular
//! file ending in [`SCHEMA_SUFFIX`], relative to the walk root. Traversal order is
//! whatever the walker produces; callers must not rely on it being sorted.
//!
//! The first traversal error is yielded once and ends the sequence, so a single
//! `for` loop at the call site sees either every match or the matches up to the error.

use crate::core::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filename suffix of a command schema file
pub const SCHEMA_SUFFIX: &str = ".hl";

/// Lazy iterator over schema files below a root directory
pub struct SchemaFiles {
    root: PathBuf,
    walker: walkdir::IntoIter,
    finished: bool,
}

impl SchemaFiles {
    /// Start a fresh scan rooted at `root`
    pub fn scan(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let walker = WalkDir::new(&root).into_iter();
        Self {
            root,
            walker,
            finished: false,
        }
    }
}

impl Iterator for SchemaFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for entry in self.walker.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Stopping scan of {}: {e}", self.root.display());
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            };

            if !is_schema_file(&entry) {
                continue;
            }

            // Entries always live below the root they were walked from
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path());
            return Some(Ok(relative.to_path_buf()));
        }

        self.finished = true;
        None
    }
}

fn is_schema_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(SCHEMA_SUFFIX)
}
