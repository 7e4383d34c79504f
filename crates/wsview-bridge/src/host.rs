//! Side-effect port implemented by each host UI.

use std::future::Future;

use crate::error::HostError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Non-blocking, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// What the bridge needs from the surrounding UI.
///
/// `open_folder` and `open_terminal` are called from the blocking pool and
/// may spawn processes. `notify` must not block.
pub trait HostSurface: Send + Sync + 'static {
    /// Open `path` as a new editor window.
    fn open_folder(&self, path: &str) -> Result<(), HostError>;

    /// Open a terminal titled `title`, submit `command_line`, show it.
    fn open_terminal(&self, title: &str, command_line: &str) -> Result<(), HostError>;

    fn notify(&self, notice: Notice);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}
