//! External formatter invocation.
//!
//! The driver talks to the formatter only through [`Formatter`], so checks and
//! repairs can be exercised without a real clang-format binary.

mod clang;

pub use clang::ClangFormat;

use std::path::PathBuf;

use crate::error::Result;

/// How the formatter is asked to treat the files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Report deviations without touching files; deviations fail the run.
    Check,
    /// Rewrite files in place.
    Fix,
}

/// Outcome of one formatter process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterRun {
    /// Exit code, `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured stdout (empty when output was passed through).
    pub stdout: String,
    /// Captured stderr (empty when output was passed through).
    pub stderr: String,
}

impl FormatterRun {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

pub trait Formatter {
    /// Run the formatter in `mode` over `files`.
    ///
    /// # Errors
    /// Returns an error if the formatter process cannot be started.
    fn run(&self, mode: FormatMode, files: &[PathBuf]) -> Result<FormatterRun>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
