use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::FormatterConfig;
use crate::error::{FormatGuardError, Result};

use super::{FormatMode, Formatter, FormatterRun};

/// clang-format driven as a child process.
///
/// The diagnostic pass runs `--dry-run --Werror` with captured output; the
/// repair pass runs `-i` and passes output straight through to the terminal.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    program: String,
    leading_args: Vec<String>,
    style: String,
}

impl ClangFormat {
    /// Build from a program and the arguments that precede formatter flags.
    #[must_use]
    pub fn new(
        program: impl Into<String>,
        leading_args: Vec<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            leading_args,
            style: style.into(),
        }
    }

    /// Build from the `[formatter]` config section.
    ///
    /// # Errors
    /// Returns an error if the configured command is empty.
    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        let (program, rest) = config.command.split_first().ok_or_else(|| {
            FormatGuardError::Config("formatter.command must name a program".to_string())
        })?;
        Ok(Self::new(program.clone(), rest.to_vec(), config.style.clone()))
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program for `mode`, excluding file paths.
    #[must_use]
    pub fn mode_args(&self, mode: FormatMode) -> Vec<String> {
        let style = format!("--style={}", self.style);
        let mut args = self.leading_args.clone();
        match mode {
            FormatMode::Check => {
                args.extend(["--dry-run".to_string(), "--Werror".to_string(), style]);
            }
            FormatMode::Fix => args.extend(["-i".to_string(), style]),
        }
        args
    }

    /// Build the full command for `mode` over `files`.
    #[must_use]
    pub fn command(&self, mode: FormatMode, files: &[PathBuf]) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.mode_args(mode))
            .args(files);
        command
    }
}

impl Formatter for ClangFormat {
    fn run(&self, mode: FormatMode, files: &[PathBuf]) -> Result<FormatterRun> {
        let spawn_error = |source: std::io::Error| FormatGuardError::FormatterSpawn {
            program: self.program.clone(),
            source,
        };
        let mut command = self.command(mode, files);

        match mode {
            FormatMode::Check => {
                let output = command
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(spawn_error)?;
                Ok(FormatterRun {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            FormatMode::Fix => {
                let status = command.stdin(Stdio::null()).status().map_err(spawn_error)?;
                Ok(FormatterRun {
                    code: status.code(),
                    ..FormatterRun::default()
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "clang_tests.rs"]
mod tests;
