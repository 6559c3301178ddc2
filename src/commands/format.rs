use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
use crate::error::{FormatGuardError, Result};
use crate::formatter::ClangFormat;
use crate::git::{GitIndex, StagedFiles};
use crate::output::Reporter;
use crate::scanner::{DirectoryScanner, ExtensionFilter};
use crate::whitelist::Whitelist;
use crate::{EXIT_CONFIG_ERROR, EXIT_WHITELIST_MISSING};

use super::repair::check_and_repair;
use super::resolve::{Mode, resolve_explicit, resolve_full_scan};

/// Entry point for a whole invocation. Errors are reported and mapped to an exit status.
#[must_use]
pub fn run_format(cli: &Cli, reporter: &Reporter) -> i32 {
    match run_format_impl(cli, reporter) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            reporter.error(&e);
            exit_code_for_error(&e)
        }
    }
}

#[must_use]
pub const fn exit_code_for_error(error: &FormatGuardError) -> i32 {
    match error {
        FormatGuardError::WhitelistNotFound { .. } => EXIT_WHITELIST_MISSING,
        _ => EXIT_CONFIG_ERROR,
    }
}

pub(crate) fn run_format_impl(cli: &Cli, reporter: &Reporter) -> Result<i32> {
    let fs = RealFileSystem;
    let root = fs.current_dir()?;

    // 1. Configuration, then the whitelist it points at
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let whitelist_path = cli
        .whitelist
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.whitelist.path));
    let whitelist = Whitelist::load(&fs, &whitelist_path)?;
    reporter.note(&format!(
        "{} whitelist entries from {}",
        whitelist.entries().len(),
        whitelist_path.display()
    ));

    // 2. Candidate set
    let filter = ExtensionFilter::new(&config.scanner.extensions, &config.scanner.exclude)?;
    let (mode, candidates) = if cli.is_full_scan() {
        let scanner = DirectoryScanner::with_base(filter, root.clone());
        let candidates = resolve_full_scan(&scanner, &whitelist, &root, reporter)?;
        (Mode::FullScan, candidates)
    } else {
        let paths = if cli.staged {
            staged_paths(&root, reporter)?
        } else {
            cli.files.clone()
        };
        let candidates = resolve_explicit(&filter, &whitelist, &paths, &root, reporter);
        (Mode::Explicit, candidates)
    };

    // 3. Check, then repair
    let formatter = ClangFormat::from_config(&config.formatter)?;
    reporter.trace(&format!("formatter: {}", formatter.program()));
    let files = candidates.into_vec();
    let outcome = check_and_repair(&formatter, &files, cli.check, reporter)?;

    Ok(outcome.exit_code(mode))
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn staged_paths(root: &Path, reporter: &Reporter) -> Result<Vec<PathBuf>> {
    let index = GitIndex::discover(root)?;
    let staged = index.staged_files()?;
    reporter.note(&format!(
        "{} staged file(s) in {}",
        staged.len(),
        index.workdir().display()
    ));
    Ok(staged.into_iter().collect())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
