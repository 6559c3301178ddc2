//! Configuration semantic validation.
//!
//! Validates that configuration values are usable after parsing: the formatter
//! command is runnable, extensions are well-formed and exclude globs compile.

use globset::Glob;

use crate::config::Config;
use crate::{FormatGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the whitelist path or formatter command is empty,
/// extensions are empty or dotted, or an exclude glob is invalid.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_whitelist_section(config)?;
    validate_scanner_section(config)?;
    validate_formatter_section(config)?;
    Ok(())
}

fn validate_whitelist_section(config: &Config) -> Result<()> {
    if config.whitelist.path.trim().is_empty() {
        return Err(FormatGuardError::Config(
            "whitelist.path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(FormatGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }

    for (i, ext) in config.scanner.extensions.iter().enumerate() {
        if ext.is_empty() {
            return Err(FormatGuardError::Config(format!(
                "scanner.extensions[{i}] must not be empty"
            )));
        }
        if ext.starts_with('.') {
            return Err(FormatGuardError::Config(format!(
                "scanner.extensions[{i}] ('{ext}') must not start with a dot"
            )));
        }
    }

    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|e| FormatGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_formatter_section(config: &Config) -> Result<()> {
    match config.formatter.command.first() {
        None => Err(FormatGuardError::Config(
            "formatter.command must name a program".to_string(),
        )),
        Some(program) if program.trim().is_empty() => Err(FormatGuardError::Config(
            "formatter.command[0] must not be blank".to_string(),
        )),
        Some(_) if config.formatter.style.trim().is_empty() => Err(FormatGuardError::Config(
            "formatter.style must not be empty".to_string(),
        )),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
