use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Argument that switches to full-scan mode when given alone.
pub const FULL_SCAN_SENTINEL: &str = ".";

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "format-guard")]
#[command(
    author,
    version,
    about = "Check whitelisted C/C++/CUDA sources with clang-format and fix them in place"
)]
#[command(long_about = "Checks C, C++ and CUDA sources against the project's clang-format \
    style and rewrites non-conforming files in place.\n\n\
    Pass the files to check (as a pre-commit hook does), or a single '.' to check \
    every file under the whitelisted paths.\n\n\
    Exit codes:\n  \
    0 - All files conform, nothing to do, or files were fixed in full-scan mode\n  \
    1 - Files were reformatted (explicit files) or violate the style (--check)\n  \
    2 - Configuration or runtime error\n  \
    167 - Whitelist file not found")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files to check, or a single '.' to check all whitelisted files
    #[arg(required_unless_present = "staged", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Check the files staged in git instead of FILES
    #[arg(long, conflicts_with = "files")]
    pub staged: bool,

    /// Only report violations, never rewrite files
    #[arg(long)]
    pub check: bool,

    /// Path to the whitelist file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub whitelist: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// True when invoked with exactly one argument equal to the full-scan sentinel.
    #[must_use]
    pub fn is_full_scan(&self) -> bool {
        !self.staged
            && self.files.len() == 1
            && self.files[0].as_os_str() == FULL_SCAN_SENTINEL
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
