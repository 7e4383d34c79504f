//! Error types for the tmux terminal surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux {subcommand} failed: {stderr}")]
    CommandFailed { subcommand: String, stderr: String },

    #[error("tmux not found")]
    NotFound,

    #[error("tmux returned no pane id for new window {0:?}")]
    MissingPaneId(String),

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}
