//! Runtime configuration gathered from flags and environment.

use std::time::Duration;

use anyhow::Context;
use wsview_bridge::BridgeConfig;
use wsview_exec::WorkspaceExecutor;
use wsview_tmux::{ServerTarget, TmuxExecutor};

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub workspace_bin: String,
    /// Editor argv; the folder path is appended as the last argument.
    pub editor: Vec<String>,
    pub tmux_socket: Option<String>,
    pub refresh_delay: Duration,
}

impl RuntimeConfig {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let editor = shell_words::split(&cli.editor)
            .with_context(|| format!("invalid editor command: {}", cli.editor))?;
        if editor.is_empty() {
            anyhow::bail!("editor command is empty");
        }
        Ok(Self {
            workspace_bin: cli.workspace_bin.clone(),
            editor,
            tmux_socket: cli.tmux_socket.clone(),
            refresh_delay: Duration::from_millis(cli.refresh_delay_ms),
        })
    }

    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            refresh_delay: self.refresh_delay,
        }
    }

    pub fn workspace_executor(&self) -> WorkspaceExecutor {
        WorkspaceExecutor::new(self.workspace_bin.clone())
    }

    /// Socket targeting: --tmux-socket / WSVIEW_TMUX_SOCKET, else the default server.
    pub fn tmux_executor(&self) -> TmuxExecutor {
        let target = match self.tmux_socket {
            Some(ref socket) => server_target(socket),
            None => ServerTarget::Default,
        };
        TmuxExecutor::default().with_target(target)
    }
}

/// A value containing `/` is a socket path (`-S`); anything else names a
/// socket in tmux's socket directory (`-L`).
fn server_target(socket: &str) -> ServerTarget {
    if socket.contains('/') {
        ServerTarget::SocketPath(socket.to_string())
    } else {
        ServerTarget::SocketName(socket.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("should parse")
    }

    #[test]
    fn editor_is_split_into_argv() {
        let cli = parse(&["wsview", "--editor", "code --new-window"]);
        let config = RuntimeConfig::from_cli(&cli).expect("valid");
        assert_eq!(config.editor, ["code", "--new-window"]);
    }

    #[test]
    fn editor_with_quoted_path() {
        let cli = parse(&["wsview", "--editor", "'/Applications/My Editor' -n"]);
        let config = RuntimeConfig::from_cli(&cli).expect("valid");
        assert_eq!(config.editor, ["/Applications/My Editor", "-n"]);
    }

    #[test]
    fn empty_editor_rejected() {
        let cli = parse(&["wsview", "--editor", "  "]);
        assert!(RuntimeConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn unbalanced_editor_quote_rejected() {
        let cli = parse(&["wsview", "--editor", "'code"]);
        assert!(RuntimeConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn tmux_socket_selects_server() {
        let cli = parse(&["wsview", "--tmux-socket", "/tmp/ws.sock"]);
        let config = RuntimeConfig::from_cli(&cli).expect("valid");
        assert_eq!(
            config.tmux_executor().target(),
            &ServerTarget::SocketPath("/tmp/ws.sock".into())
        );
    }

    #[test]
    fn tmux_socket_name_selects_named_server() {
        let cli = parse(&["wsview", "--tmux-socket", "work"]);
        let config = RuntimeConfig::from_cli(&cli).expect("valid");
        assert_eq!(
            config.tmux_executor().target(),
            &ServerTarget::SocketName("work".into())
        );
    }

    #[test]
    fn no_tmux_socket_uses_default_server() {
        let cli = parse(&["wsview"]);
        let config = RuntimeConfig::from_cli(&cli).expect("valid");
        assert_eq!(config.tmux_executor().target(), &ServerTarget::Default);
    }

    #[test]
    fn refresh_delay_from_flag() {
        let cli = parse(&["wsview", "--refresh-delay-ms", "250"]);
        let config = RuntimeConfig::from_cli(&cli).expect("valid");
        assert_eq!(config.bridge_config().refresh_delay, Duration::from_millis(250));
    }
}
