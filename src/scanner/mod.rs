mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::path_utils::relative_to;

/// Trait for finding candidate files under a root.
pub trait FileScanner {
    /// Scan a root and return all matching file paths.
    ///
    /// A regular file root is returned if it matches the filter, a directory
    /// root is walked to any depth, and a missing root yields nothing.
    ///
    /// # Errors
    /// Returns an error if the root cannot be scanned.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    base: Option<PathBuf>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter, base: None }
    }

    /// Scanner whose filter sees paths relative to `base`, so exclude globs
    /// can be written relative to the project root.
    #[must_use]
    pub const fn with_base(filter: F, base: PathBuf) -> Self {
        Self {
            filter,
            base: Some(base),
        }
    }

    fn is_regular_file(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(Self::is_regular_file)
            .map(DirEntry::into_path)
            .filter(|p| self.filter.should_include(&self.filter_path(p)))
            .collect()
    }

    fn filter_path(&self, path: &Path) -> PathBuf {
        self.base
            .as_deref()
            .map_or_else(|| path.to_path_buf(), |base| relative_to(path, base))
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
