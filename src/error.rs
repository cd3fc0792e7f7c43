//! Error types for netform.
//!
//! Uses `thiserror` for ergonomic error definitions. The validator itself
//! never errors: syntactically invalid text is a `false` answer, not a
//! fault. Errors exist only at the boundaries where typed input is
//! constructed (port parsing) and where the CLI touches the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for port parsing and domain validation.
#[derive(Error, Debug, Clone)]
pub enum PortError {
    #[error("port {0} is out of valid range (0-65535)")]
    OutOfRange(i64),

    #[error("invalid port number: {0}")]
    InvalidFormat(String),

    #[error("empty port value")]
    Empty,
}

/// Result type alias for port operations.
pub type PortResult<T> = Result<T, PortError>;

/// Error type for settings loading and persistence.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory for this platform")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
