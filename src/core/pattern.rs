//! Filename matching for `search`.

use crate::core::error::Result;
use regex::Regex;
use std::path::Path;

/// A compiled search expression applied to file names
#[derive(Debug, Clone)]
pub struct SchemaPattern {
    regex: Regex,
}

impl SchemaPattern {
    /// Compile `pattern` with standard regex syntax
    pub fn compile(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Unanchored match against the final component of `path` only.
    /// Paths without a file name never match.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.regex.is_match(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}
