use crate::commands::NOT_INITIALIZED;
use crate::core::{
    config::CacheConfig, error::Result, pattern::SchemaPattern, print_info, print_path,
    print_section_header, scanner::SchemaFiles,
};
use std::path::{Path, PathBuf};

pub fn execute_search(config: &CacheConfig, pattern: &str) -> Result<()> {
    if !config.cache_exists() {
        print_info(NOT_INITIALIZED);
        return Ok(());
    }

    let compiled = SchemaPattern::compile(pattern)?;

    print_section_header(&format!(
        "Searching for .hl files matching pattern: {pattern}"
    ));

    let mut found = false;
    for file in matching_files(config.cache_dir(), &compiled) {
        print_path(&file?);
        found = true;
    }

    if !found {
        print_info("No .hl files found matching the pattern.");
    }

    Ok(())
}

/// Schema files below `root` whose file name matches `pattern`, in traversal order.
/// Scan errors are passed through unchanged.
pub fn matching_files<'a>(
    root: &Path,
    pattern: &'a SchemaPattern,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    SchemaFiles::scan(root).filter(move |file| match file {
        Ok(path) => pattern.matches(path),
        Err(_) => true,
    })
}
