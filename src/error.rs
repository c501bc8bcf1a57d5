//! Error types for firewall-guard.
//!
//! Uses `thiserror` for ergonomic error definitions. Validation errors for
//! individual values live next to their types (`PortError`, `HostError`,
//! `StatusError`); this module holds the errors that cross module seams.

use std::path::PathBuf;
use thiserror::Error;

/// A fault in the fan-out/join machinery of one evaluation cycle.
///
/// This never describes a port's state: unreachable ports are a `Closed`
/// result, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("probe task for port {port} failed: {reason}")]
    ProbeTask { port: u16, reason: String },
}

/// Result type alias for evaluation.
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Errors from the configuration path.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more user-supplied fields failed validation.
    #[error("{0}")]
    Invalid(String),

    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
