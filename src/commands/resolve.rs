//! Candidate resolution: which files the formatter will see.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::Result;
use crate::output::Reporter;
use crate::path_utils::{normalize_path, relative_to};
use crate::scanner::{ExtensionFilter, FileFilter, FileScanner};
use crate::whitelist::Whitelist;

/// How the candidate set is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every matching file under every whitelisted prefix.
    FullScan,
    /// Literal paths from the command line or the git index.
    Explicit,
}

/// Deduplicated, insertion-ordered set of files to format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    files: IndexSet<PathBuf>,
}

impl CandidateSet {
    /// Insert a path, deduplicating on its normalized form.
    pub fn insert(&mut self, path: &Path) -> bool {
        self.files.insert(normalize_path(path))
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.files.into_iter().collect()
    }
}

/// Enumerate matching files under each whitelist entry, resolved against `root`.
///
/// Entries that do not exist contribute nothing. Files beneath `root` are
/// returned relative to it.
///
/// # Errors
/// Returns an error if the scanner fails.
pub fn resolve_full_scan<S: FileScanner>(
    scanner: &S,
    whitelist: &Whitelist,
    root: &Path,
    reporter: &Reporter,
) -> Result<CandidateSet> {
    let mut candidates = CandidateSet::default();

    for entry_root in whitelist.roots(root) {
        let files = scanner.scan(&entry_root)?;
        reporter.trace(&format!(
            "{} file(s) under {}",
            files.len(),
            entry_root.display()
        ));
        for file in files {
            candidates.insert(&relative_to(&file, root));
        }
    }

    Ok(candidates)
}

/// Keep each path that has a recognized extension, is a regular file and
/// lies under a whitelisted prefix. Other paths are dropped without error.
///
/// Absolute paths beneath `root` are made relative to it before the
/// whitelist is consulted; relative paths are resolved against `root`.
#[must_use]
pub fn resolve_explicit(
    filter: &ExtensionFilter,
    whitelist: &Whitelist,
    paths: &[PathBuf],
    root: &Path,
    reporter: &Reporter,
) -> CandidateSet {
    let mut candidates = CandidateSet::default();

    for path in paths {
        let relative = normalize_path(&relative_to(path, root));

        if !filter.has_valid_extension(&relative) {
            reporter.note(&format!("skipping {}: not a C/C++/CUDA source", path.display()));
        } else if !filter.should_include(&relative) {
            reporter.note(&format!("skipping {}: excluded by pattern", path.display()));
        } else if !root.join(&relative).is_file() {
            reporter.note(&format!("skipping {}: not a regular file", path.display()));
        } else if !whitelist.contains(&relative) {
            reporter.note(&format!("skipping {}: not whitelisted", path.display()));
        } else {
            candidates.insert(&relative);
        }
    }

    candidates
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
