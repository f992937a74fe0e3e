//! Shared CLI plumbing: exit codes, errors and small helpers.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::error::BrandError;
use crate::models::RgbColor;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: malformed color, unsupported format, invalid option
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Bad user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<BrandError> for CliError {
    fn from(err: BrandError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a color argument, mapping failures to a validation error.
pub fn parse_color(input: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(input).map_err(CliError::from)
}

/// Loads the configuration for commands that only read defaults.
///
/// A broken file is reported and the built-in defaults are used; nothing is
/// written back.
pub fn load_config_or_default() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {e:#}");
        Config::default()
    })
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Writes `content` to `path`, or prints it when no path is given.
pub fn write_or_print(content: &str, path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(path) => {
            fs::write(path, content).map_err(|e| {
                CliError::io(format!("Failed to write {}: {e}", path.display()))
            })?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
