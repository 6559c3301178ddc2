use serde::Deserialize;

use crate::whitelist::DEFAULT_WHITELIST_PATH;

/// Extensions recognized as C, C++ or CUDA sources (without leading dot).
pub const DEFAULT_EXTENSIONS: [&str; 7] = ["c", "h", "cpp", "hpp", "cxx", "hxx", "cu"];

/// Pinned formatter invocation used when no config overrides it.
pub const DEFAULT_FORMATTER_COMMAND: [&str; 3] = ["pipx", "run", "clang-format==14.0.3"];

/// Style argument passed as `--style=<style>`; `file` lets clang-format find `.clang-format`.
pub const DEFAULT_STYLE: &str = "file";

/// Whitelist file location [whitelist].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WhitelistConfig {
    /// Path of the whitelist file, relative to the working directory.
    #[serde(default = "default_whitelist_path")]
    pub path: String,
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            path: default_whitelist_path(),
        }
    }
}

/// Candidate discovery settings [scanner].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions to format (without leading dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns pruned from whitelisted directory walks.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// External formatter invocation [formatter].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Program and leading arguments, e.g. `["pipx", "run", "clang-format==14.0.3"]`.
    #[serde(default = "default_formatter_command")]
    pub command: Vec<String>,

    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: default_formatter_command(),
            style: default_style(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub whitelist: WhitelistConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub formatter: FormatterConfig,
}

fn default_whitelist_path() -> String {
    DEFAULT_WHITELIST_PATH.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_formatter_command() -> Vec<String> {
    DEFAULT_FORMATTER_COMMAND
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}
