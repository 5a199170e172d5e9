//! Schema Manager - keeps a local clone of the opencommand schema repository and
//! answers simple questions about it.
//!
//! The cache lives at `~/.opencmd/commands`. Commands can clone it, list or search
//! the `.hl` schema files it contains, and check whether it is behind the remote
//! `main` branch.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Cache configuration
//! - Schema file scanning and filename patterns
//! - The repository client abstraction and its git2 implementation
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Version control
    CachedRepository,
    // Configuration
    CacheConfig,
    GitClient,
    GitRepo,
    RemoteReference,
    RepositoryClient,
    // Error handling
    Result,
    SchemaFiles,
    SchemaManagerError,
    // Cache queries
    SchemaPattern,
};
