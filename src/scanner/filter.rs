use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{FormatGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with one of the configured extensions and
/// that match none of the exclude globs.
pub struct ExtensionFilter {
    suffixes: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// Extensions are given without the leading dot (`"cpp"`, not `".cpp"`).
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| FormatGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| FormatGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffixes: extensions.iter().map(|ext| format!(".{ext}")).collect(),
            exclude_patterns,
        })
    }

    /// Check the file name suffix only, ignoring exclude patterns.
    #[must_use]
    pub fn has_valid_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|s| name.ends_with(s.as_str())))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_empty() {
            return false;
        }
        let file_name = path.file_name().unwrap_or_default();
        self.exclude_patterns.is_match(file_name) || self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
