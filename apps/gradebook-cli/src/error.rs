//! Error types for the gradebook CLI

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A command named a student who is not on the roster
    #[error("No student with name {0} found.")]
    StudentNotFound(String),

    /// JSON output failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    /// Config file is not valid TOML for this schema
    #[error("TOML parse error in {path}: {message}")]
    Parse { path: String, message: String },
}
