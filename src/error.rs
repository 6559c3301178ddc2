use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatGuardError {
    #[error("Could not find whitelist file at {}", path.display())]
    WhitelistNotFound { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Failed to run formatter '{program}': {source}")]
    FormatterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl FormatGuardError {
    /// Short label used as the heading of an error report.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::WhitelistNotFound { .. } => "Whitelist",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "FileAccess",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Git(_) => "Git",
            Self::FormatterSpawn { .. } => "Formatter",
        }
    }

    /// Actionable hint printed below the error, if any.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { .. } => {
                Some("check the glob syntax in [scanner].exclude".to_string())
            }
            Self::FormatterSpawn { program, .. } => Some(format!(
                "make sure '{program}' is installed and on PATH, \
                 or set [formatter].command in .format-guard.toml"
            )),
            Self::Git(_) => Some("--staged must be run inside a git work tree".to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
