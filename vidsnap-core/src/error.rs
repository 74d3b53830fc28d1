// ============================================================================
// vidsnap-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Snapshot Pipeline
//
// All fallible operations in vidsnap-core return `CoreResult<T>`. Every
// variant except `SnapshotFailure` is fatal for a run; `SnapshotFailure` is
// recorded per timestamp and the batch continues.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidsnap-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Required dependency '{0}' not found. Please install it and ensure it is in your PATH.")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed while waiting for command '{0}': {1}")]
    CommandWait(String, io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Probe failure: {0}")]
    ProbeFailure(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Insufficient duration: {0}")]
    InsufficientDuration(String),

    #[error("Snapshot {index} at {timestamp}s failed: {message}")]
    SnapshotFailure {
        index: usize,
        timestamp: u64,
        message: String,
    },
}

/// Result type for vidsnap-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error, mapping `NotFound` to `DependencyNotFound`.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    let cmd = cmd.into();
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd)
    } else {
        CoreError::CommandStart(cmd, err)
    }
}

pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

impl CoreError {
    /// Whether this error should abort the whole run.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CoreError::SnapshotFailure { .. })
    }
}
