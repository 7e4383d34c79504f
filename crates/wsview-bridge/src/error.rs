//! Bridge error taxonomy.

use thiserror::Error;
use wsview_core::PathRejection;
use wsview_exec::ExecError;

/// Failure reported by a host adapter (terminal, editor launcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("could not open terminal: {0}")]
    Terminal(String),

    #[error("could not open folder: {0}")]
    OpenFolder(String),
}

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The external tool could not be started or exited non-zero.
    #[error("{stderr}")]
    ExternalTool { stderr: String },

    /// The tool answered, but not with the expected structure.
    #[error("unexpected workspace output: {0}")]
    Parse(#[from] serde_json::Error),

    /// A destructive action's target failed a safety precondition.
    #[error("refusing to delete: {0}")]
    Validation(#[from] PathRejection),

    #[error(transparent)]
    Host(#[from] HostError),

    /// A blocking worker panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<ExecError> for BridgeError {
    fn from(e: ExecError) -> Self {
        BridgeError::ExternalTool { stderr: e.stderr() }
    }
}

impl From<tokio::task::JoinError> for BridgeError {
    fn from(e: tokio::task::JoinError) -> Self {
        BridgeError::Task(e.to_string())
    }
}
