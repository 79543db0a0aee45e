//! CLI error type.

use std::fmt;

use moonwatch::app::AppError;
use moonwatch::cache::CacheError;
use moonwatch::config::ConfigError;

/// Errors surfaced to the terminal with a nonzero exit code.
#[derive(Debug)]
pub enum CliError {
    /// The configuration file could not be read.
    Config(ConfigError),

    /// The application could not start or rejected the input.
    App(AppError),

    /// A cache maintenance operation failed.
    Cache(CacheError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::App(e) => write!(f, "{}", e),
            CliError::Cache(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::App(e) => Some(e),
            CliError::Cache(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::App(e)
    }
}

impl From<CacheError> for CliError {
    fn from(e: CacheError) -> Self {
        CliError::Cache(e)
    }
}
