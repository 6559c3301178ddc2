//! Whitelist of path prefixes eligible for formatting.
//!
//! The whitelist is a flat text file with one path prefix per line. Blank lines
//! are ignored and surrounding whitespace is trimmed. Paths are matched by
//! whole segments after lexical normalization.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::FileSystem;
use crate::error::{FormatGuardError, Result};
use crate::path_utils::path_within;

/// Default whitelist location, relative to the project root.
pub const DEFAULT_WHITELIST_PATH: &str = ".dev/whitelist.txt";

/// Ordered list of whitelisted path prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    entries: Vec<String>,
}

impl Whitelist {
    /// Parse whitelist content, keeping non-blank trimmed lines in file order.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { entries }
    }

    /// Load the whitelist file at `path`.
    ///
    /// # Errors
    /// Returns `WhitelistNotFound` if the file does not exist and `FileRead`
    /// if it exists but cannot be read.
    pub fn load<F: FileSystem>(fs: &F, path: &Path) -> Result<Self> {
        if !fs.is_file(path) {
            return Err(FormatGuardError::WhitelistNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs.read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                FormatGuardError::WhitelistNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                FormatGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Check whether `path` equals a whitelisted prefix or lies beneath one.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries
            .iter()
            .any(|entry| path_within(path, Path::new(entry)))
    }

    /// Resolve every entry against `root` for directory enumeration.
    #[must_use]
    pub fn roots(&self, root: &Path) -> Vec<PathBuf> {
        self.entries.iter().map(|entry| root.join(entry)).collect()
    }
}

#[cfg(test)]
#[path = "whitelist_tests.rs"]
mod tests;
