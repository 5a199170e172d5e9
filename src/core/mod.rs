//! Core functionality for the schema-manager tool.
//!
//! This module provides the building blocks the commands are composed from: cache
//! configuration, the schema file scanner, filename patterns, the repository client
//! seam and its libgit2 implementation, error types and output formatting.

pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod output;
pub mod pattern;
pub mod repository;
pub mod scanner;

#[cfg(test)]
pub(crate) mod testing;

// === Error handling ===
// Core error type and result alias used throughout the application
pub use error::{Result, SchemaManagerError};

// === Configuration ===
// Cache location and remote URL, threaded through every workflow
pub use config::CacheConfig;

// === Version control ===
// Capability traits and the git2-backed client
pub use git::{GitClient, GitRepo};
pub use repository::{CachedRepository, RemoteReference, RepositoryClient};

// === Cache queries ===
// Lazy `.hl` discovery and filename matching
pub use pattern::SchemaPattern;
pub use scanner::SchemaFiles;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_detail, print_error, print_hint, print_info, print_path, print_section_header,
    print_success, print_warning,
};
