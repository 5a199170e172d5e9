use crate::core::error::{Result, SchemaManagerError};
use std::path::{Path, PathBuf};

/// Location of the schema cache relative to the user home directory
pub const CACHE_SUBPATH: [&str; 2] = [".opencmd", "commands"];

pub fn get_cache_directory() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SchemaManagerError::HomeDirectoryNotFound)?;
    Ok(cache_directory_in(&home))
}

pub fn cache_directory_in(home: &Path) -> PathBuf {
    CACHE_SUBPATH
        .iter()
        .fold(home.to_path_buf(), |path, part| path.join(part))
}
