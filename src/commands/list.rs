use crate::commands::NOT_INITIALIZED;
use crate::core::{
    config::CacheConfig, error::Result, print_info, print_path, print_section_header,
    scanner::SchemaFiles,
};

pub fn execute_list(config: &CacheConfig) -> Result<()> {
    if !config.cache_exists() {
        print_info(NOT_INITIALIZED);
        return Ok(());
    }

    print_section_header("Listing .hl files in cache directory:");

    for file in SchemaFiles::scan(config.cache_dir()) {
        print_path(&file?);
    }

    Ok(())
}
