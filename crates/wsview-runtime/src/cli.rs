//! CLI definition using clap derive.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wsview", about = "Browse and act on workspaces managed by the `workspace` CLI")]
pub struct Cli {
    /// Workspace tool binary
    #[arg(long, global = true, env = "WSVIEW_WORKSPACE_BIN", default_value = "workspace")]
    pub workspace_bin: String,

    /// Command used to open a workspace folder; the path is appended
    #[arg(long, global = true, env = "WSVIEW_EDITOR", default_value = "code --new-window")]
    pub editor: String,

    /// tmux server for interactive commands: a socket path, or a socket name (-L)
    #[arg(long, global = true, env = "WSVIEW_TMUX_SOCKET")]
    pub tmux_socket: Option<String>,

    /// Delay before re-listing after a delete, in milliseconds
    #[arg(long, global = true, env = "WSVIEW_REFRESH_DELAY_MS", default_value = "1000")]
    pub refresh_delay_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List workspaces (default)
    Ls(LsOpts),
    /// Machine-readable workspace list
    Json,
    /// Print the workspace base directory
    BaseDir,
    /// Open a workspace in a new editor window
    Open(NameArg),
    /// Run `workspace warm` in a terminal
    Warm(NameArg),
    /// Run `workspace doctor` in a terminal
    Doctor,
    /// Delete a workspace after confirmation
    Delete(DeleteOpts),
    /// Interactive workspace tree
    Tui,
}

#[derive(Args, Default)]
pub struct LsOpts {
    /// Color output: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: String,
}

#[derive(Args)]
pub struct NameArg {
    /// Workspace name as shown by `wsview ls`
    pub name: String,
}

#[derive(Args)]
pub struct DeleteOpts {
    /// Workspace name as shown by `wsview ls`
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
