//! Error types for external tool invocation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    /// The tool ran and exited non-zero. `stderr` is the captured error stream.
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExecError {
    /// Text shown to the user: the tool's stderr when it produced any.
    pub fn stderr(&self) -> String {
        match self {
            ExecError::CommandFailed { stderr, .. } if !stderr.is_empty() => stderr.clone(),
            other => other.to_string(),
        }
    }
}
