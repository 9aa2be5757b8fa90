//! CLI error type.

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument value was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing seed data failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
