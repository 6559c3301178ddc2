//! Check-then-repair sequencing over a resolved candidate set.

use std::path::PathBuf;

use crate::error::Result;
use crate::formatter::{FormatMode, Formatter, FormatterRun};
use crate::output::Reporter;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS};

use super::resolve::Mode;

pub const NO_FILES_MESSAGE: &str = "No files found to format.";

/// What the formatter pass concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate set was empty; the formatter never ran.
    NoFiles,
    /// Every file already conforms.
    Clean,
    /// Non-conforming files were rewritten in place.
    Repaired,
    /// Non-conforming files were found and left untouched (`--check`).
    Violations,
}

impl Outcome {
    /// Process exit status for this outcome.
    ///
    /// A repair fails the run only in explicit mode.
    #[must_use]
    pub const fn exit_code(self, mode: Mode) -> i32 {
        match (self, mode) {
            (Self::NoFiles | Self::Clean, _) | (Self::Repaired, Mode::FullScan) => EXIT_SUCCESS,
            (Self::Repaired, Mode::Explicit) | (Self::Violations, _) => EXIT_VIOLATIONS,
        }
    }
}

/// Run the formatter in check mode and, if that fails, in fix mode.
///
/// With `check_only` the fix pass is skipped and the captured diagnostics are
/// forwarded instead.
///
/// # Errors
/// Returns an error if the formatter cannot be started.
pub fn check_and_repair<F: Formatter>(
    formatter: &F,
    files: &[PathBuf],
    check_only: bool,
    reporter: &Reporter,
) -> Result<Outcome> {
    if files.is_empty() {
        reporter.info(NO_FILES_MESSAGE);
        return Ok(Outcome::NoFiles);
    }

    reporter.note(&format!("checking {} file(s)", files.len()));
    let check = formatter.run(FormatMode::Check, files)?;
    if check.success() {
        reporter.trace("formatter check passed");
        return Ok(Outcome::Clean);
    }

    if check_only {
        forward_captured(reporter, &check);
        reporter.warning(
            &format!("Formatting violations found in {} file(s)", files.len()),
            Some("Run without --check to fix them in place"),
        );
        return Ok(Outcome::Violations);
    }

    if reporter.verbose() >= 1 {
        forward_captured(reporter, &check);
    }

    let fix = formatter.run(FormatMode::Fix, files)?;
    if !fix.success() {
        reporter.warning(&exit_description("Formatter fix pass", fix.code), None);
    }

    reporter.note(&format!("reformatted {} file(s)", files.len()));
    Ok(Outcome::Repaired)
}

fn forward_captured(reporter: &Reporter, run: &FormatterRun) {
    reporter.forward(&run.stdout);
    reporter.forward(&run.stderr);
}

fn exit_description(what: &str, code: Option<i32>) -> String {
    match code {
        Some(code) => format!("{what} exited with status {code}"),
        None => format!("{what} was terminated by a signal"),
    }
}

#[cfg(test)]
#[path = "repair_tests.rs"]
mod tests;
