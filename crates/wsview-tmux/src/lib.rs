//! wsview-tmux: interactive terminal surface backed by tmux.
//! Opens a named window, types a command line into it and focuses it.
//! The command's output is never read back.

pub mod error;
pub mod executor;
pub mod terminal;

pub use error::TmuxError;
pub use executor::{ServerTarget, TmuxCommandRunner, TmuxExecutor};
pub use terminal::{TerminalHandle, TmuxTerminal};
