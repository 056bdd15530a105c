//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Panel Manager
//!
//! Every collaborator that touches the outside world (filesystem, shell,
//! config, pinned-directory store) reports failures through this enum.
//! Transition handlers never return it: failures are logged and surfaced as
//! a short status message instead.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all panel manager operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Requested file or directory does not exist.
    #[error("File or directory not found: {0:?}")]
    NotFound(PathBuf),

    /// File operation specific errors
    #[error("File operation '{operation}' failed on {path:?}: {reason}")]
    FileOperationFailed {
        operation: String, // "create", "mkdir", "rename", ...
        path: PathBuf,
        reason: String,
    },

    /// A shell command exited unsuccessfully or could not be spawned.
    #[error("External command failed: {cmd} (exit code: {code:?})\n{output}")]
    ExternalCmd {
        cmd: String,
        code: Option<i32>,
        output: String,
    },

    /// A path produced by the command line could not be resolved.
    #[error("Path resolution failed for {path:?}: {reason}")]
    PathResolution { path: PathBuf, reason: String },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization or deserialization error (pinned directories).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a file operation failure error
    pub fn file_operation_failed<S1, P, S2>(operation: S1, path: P, reason: S2) -> Self
    where
        S1: Into<String>,
        P: Into<PathBuf>,
        S2: Into<String>,
    {
        Self::FileOperationFailed {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a path resolution failure error
    pub fn path_resolution_failed<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::PathResolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an external command failure error
    pub fn external_cmd<S1: Into<String>, S2: Into<String>>(
        cmd: S1,
        code: Option<i32>,
        output: S2,
    ) -> Self {
        Self::ExternalCmd {
            cmd: cmd.into(),
            code,
            output: output.into(),
        }
    }

    /// Short message suitable for the transient status line.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "This path does not exist",
            Self::ExternalCmd { .. } => "command failed (see log)",
            Self::PathResolution { .. } => "failed to determine directory",
            Self::FileOperationFailed { .. } | Self::Io(_) => "file operation failed (see log)",
            _ => "unexpected error (see log)",
        }
    }
}
