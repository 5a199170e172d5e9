pub mod init;
pub mod list;
pub mod search;
pub mod status;

pub use init::*;
pub use list::*;
pub use search::*;
pub use status::*;

/// Printed by every command that needs the cache when it has not been cloned yet
pub const NOT_INITIALIZED: &str = "Repository not found. Run 'schema-manager init' first.";
