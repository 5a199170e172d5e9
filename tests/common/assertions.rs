//! Common assertion helpers for command output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Message printed when the cache has not been cloned yet
pub fn not_initialized() -> impl Predicate<str> {
    predicates::str::contains("Repository not found. Run 'schema-manager init' first.")
}

/// A cached path printed as a list or search result line
pub fn has_listed_path(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("  {path}\n"))
}

pub fn up_to_date() -> impl Predicate<str> {
    predicates::str::contains("Local repository is up to date with remote.")
}

pub fn behind() -> impl Predicate<str> {
    predicates::str::contains("Local repository is behind remote.")
}
