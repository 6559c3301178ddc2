pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatter;
pub mod git;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod whitelist;

pub use error::{FormatGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit status when the whitelist file is missing.
pub const EXIT_WHITELIST_MISSING: i32 = 167;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
