//! User-facing messages, gated by `--quiet` and `--verbose`.
//!
//! Informational lines go to stdout; notes, warnings and errors go to stderr.

use std::cell::RefCell;
use std::error::Error as _;
use std::io::Write;

use crate::error::FormatGuardError;

use super::{ColorMode, ErrorOutput};

pub struct Reporter {
    style: ErrorOutput,
    verbose: u8,
    quiet: bool,
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
}

impl Reporter {
    /// Reporter writing to the process stdout and stderr.
    #[must_use]
    pub fn new(color: ColorMode, verbose: u8, quiet: bool) -> Self {
        Self::with_writers(
            ErrorOutput::new(color),
            verbose,
            quiet,
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
    }

    /// Reporter writing to arbitrary sinks.
    #[must_use]
    pub fn with_writers(
        style: ErrorOutput,
        verbose: u8,
        quiet: bool,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Self {
            style,
            verbose,
            quiet,
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    #[must_use]
    pub const fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Plain informational line on stdout, suppressed by `--quiet`.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            let _ = writeln!(self.out.borrow_mut(), "{message}");
        }
    }

    /// Note on stderr, shown with `-v`.
    pub fn note(&self, message: &str) {
        if self.verbose >= 1 {
            self.style.write_note(&mut *self.err.borrow_mut(), message);
        }
    }

    /// Note on stderr, shown with `-vv`.
    pub fn trace(&self, message: &str) {
        if self.verbose >= 2 {
            self.style.write_note(&mut *self.err.borrow_mut(), message);
        }
    }

    pub fn warning(&self, message: &str, suggestion: Option<&str>) {
        self.style
            .write_warning(&mut *self.err.borrow_mut(), message, None, suggestion);
    }

    /// Report an error with its source chain as detail.
    pub fn error(&self, error: &FormatGuardError) {
        let detail = error.source().map(ToString::to_string);
        let suggestion = error.suggestion();
        self.style.write_error(
            &mut *self.err.borrow_mut(),
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            suggestion.as_deref(),
        );
    }

    /// Forward output captured from a child process to stderr.
    pub fn forward(&self, captured: &str) {
        if captured.is_empty() {
            return;
        }
        let mut err = self.err.borrow_mut();
        let _ = err.write_all(captured.as_bytes());
        if !captured.ends_with('\n') {
            let _ = writeln!(err);
        }
    }

    /// Flush both sinks.
    pub fn flush(&self) {
        let _ = self.out.borrow_mut().flush();
        let _ = self.err.borrow_mut().flush();
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
