//! The external tool's command set.
//!
//! Captured commands (`List`, `BaseDir`) are executed directly with an argv,
//! no shell involved. Interactive commands (`Warm`, `Doctor`, `Delete`) are
//! typed into a terminal, so they are rendered as a shell command line with
//! every untrusted part single-quoted.

use crate::shell::quote_single;

/// Binary name of the external workspace tool.
pub const DEFAULT_WORKSPACE_BIN: &str = "workspace";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceCommand {
    /// `workspace --json`
    List,
    /// `workspace --get-base-dir`
    BaseDir,
    /// `workspace warm`
    Warm,
    /// `workspace doctor`
    Doctor,
    /// `workspace delete '<name>'`
    Delete { name: String },
}

impl WorkspaceCommand {
    /// Argument vector (without the binary) for direct execution.
    pub fn args(&self) -> Vec<&str> {
        match self {
            WorkspaceCommand::List => vec!["--json"],
            WorkspaceCommand::BaseDir => vec!["--get-base-dir"],
            WorkspaceCommand::Warm => vec!["warm"],
            WorkspaceCommand::Doctor => vec!["doctor"],
            WorkspaceCommand::Delete { name } => vec!["delete", name.as_str()],
        }
    }

    /// Command line to submit to an interactive shell.
    ///
    /// The binary name is emitted bare when it is the default and quoted
    /// otherwise, so a configured path with spaces survives the shell.
    pub fn command_line(&self, bin: &str) -> String {
        let program = if bin == DEFAULT_WORKSPACE_BIN {
            bin.to_string()
        } else {
            quote_single(bin)
        };
        match self {
            WorkspaceCommand::Delete { name } => {
                format!("{program} delete {}", quote_single(name))
            }
            other => {
                let mut line = program;
                for arg in other.args() {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            }
        }
    }
}
