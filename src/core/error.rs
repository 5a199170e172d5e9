//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SchemaManagerError`] which covers every failure mode of the
//! schema cache workflows. It uses `thiserror` for ergonomic error definitions and
//! includes named constructors for the variants that carry a path or context.
//!
//! # Public API
//! - [`SchemaManagerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SchemaManagerError>`
//!
//! # Error Categories
//! - **Filesystem**: cache directory creation/removal, directory traversal
//! - **Version control**: clone, open, remote lookup, HEAD resolution
//! - **Network**: listing the references advertised by a remote
//! - **Patterns**: malformed search expressions

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for schema-manager
#[derive(Error, Debug)]
pub enum SchemaManagerError {
    // Configuration errors
    #[error("Could not determine the user home directory")]
    HomeDirectoryNotFound,

    // Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove existing cache directory '{path}': {source}")]
    CacheDirectoryRemovalFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error walking directory: {0}")]
    Walk(#[from] walkdir::Error),

    // Version control errors
    #[error("Error cloning repository from {url}: {source}")]
    CloneFailed { url: String, source: git2::Error },

    #[error("Error opening repository at '{path}': {source}")]
    OpenFailed { path: PathBuf, source: git2::Error },

    #[error("Error getting remote '{name}': {source}")]
    RemoteNotFound { name: String, source: git2::Error },

    #[error("Error getting HEAD: {0}")]
    Head(git2::Error),

    #[error("HEAD does not point to a commit")]
    HeadWithoutCommit,

    // Network errors
    #[error("Error listing remote refs for '{name}': {source}")]
    RemoteListingFailed { name: String, source: git2::Error },

    // Pattern errors
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Convenience type alias for Results using SchemaManagerError
pub type Result<T> = std::result::Result<T, SchemaManagerError>;

impl SchemaManagerError {
    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache directory removal failed error
    pub fn cache_directory_removal_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryRemovalFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a clone failed error
    pub fn clone_failed(url: impl Into<String>, source: git2::Error) -> Self {
        Self::CloneFailed {
            url: url.into(),
            source,
        }
    }

    /// Create an open failed error
    pub fn open_failed(path: impl Into<PathBuf>, source: git2::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a remote not found error
    pub fn remote_not_found(name: impl Into<String>, source: git2::Error) -> Self {
        Self::RemoteNotFound {
            name: name.into(),
            source,
        }
    }

    /// Create a remote listing failed error
    pub fn remote_listing_failed(name: impl Into<String>, source: git2::Error) -> Self {
        Self::RemoteListingFailed {
            name: name.into(),
            source,
        }
    }

    /// True for failures that happened while talking to the remote over the network
    pub fn is_network(&self) -> bool {
        matches!(self, Self::RemoteListingFailed { .. })
    }

    /// True for failures reported by the version-control library
    pub fn is_vcs(&self) -> bool {
        matches!(
            self,
            Self::CloneFailed { .. }
                | Self::OpenFailed { .. }
                | Self::RemoteNotFound { .. }
                | Self::Head(_)
                | Self::HeadWithoutCommit
        )
    }
}
