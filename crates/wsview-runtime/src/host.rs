//! Host adapters: tmux terminals, editor launcher, CLI and TUI surfaces.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

use tokio::sync::{mpsc, oneshot};
use wsview_bridge::{HostError, HostSurface, Notice, NoticeLevel};
use wsview_core::WorkspaceRecord;
use wsview_tmux::{TmuxExecutor, TmuxTerminal};

use crate::config::RuntimeConfig;

/// Launches the configured editor on a folder without waiting for it.
pub struct EditorLauncher {
    argv: Vec<String>,
}

impl EditorLauncher {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// Full argv for opening `path`; the path is always its own argument.
    pub fn command_for(&self, path: &str) -> Vec<String> {
        let mut argv = self.argv.clone();
        argv.push(path.to_string());
        argv
    }

    pub fn open(&self, path: &str) -> Result<(), HostError> {
        let argv = self.command_for(path);
        let Some((program, args)) = argv.split_first() else {
            return Err(HostError::OpenFolder("editor command is empty".into()));
        };
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| HostError::OpenFolder(format!("failed to launch {program}: {e}")))
    }
}

/// Side effects shared by every host: terminals and the editor.
pub struct Launchers {
    terminal: TmuxTerminal<TmuxExecutor>,
    editor: EditorLauncher,
}

impl Launchers {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            terminal: TmuxTerminal::new(config.tmux_executor()),
            editor: EditorLauncher::new(config.editor.clone()),
        }
    }

    fn open_folder(&self, path: &str) -> Result<(), HostError> {
        self.editor.open(path)
    }

    fn open_terminal(&self, title: &str, command_line: &str) -> Result<(), HostError> {
        self.terminal
            .submit(title, command_line)
            .map(|_| ())
            .map_err(|e| HostError::Terminal(e.to_string()))
    }
}

// ── CLI host ────────────────────────────────────────────────────────────────

/// One-shot host: notices on stderr, confirmation on stdin.
pub struct CliHost {
    launchers: Launchers,
    assume_yes: bool,
}

impl CliHost {
    pub fn new(launchers: Launchers, assume_yes: bool) -> Self {
        Self {
            launchers,
            assume_yes,
        }
    }
}

/// `y`, `yes` or `delete` (any case) confirm; anything else declines.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "delete"
    )
}

pub(crate) fn notice_prefix(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    }
}

impl HostSurface for CliHost {
    fn open_folder(&self, path: &str) -> Result<(), HostError> {
        self.launchers.open_folder(path)
    }

    fn open_terminal(&self, title: &str, command_line: &str) -> Result<(), HostError> {
        self.launchers.open_terminal(title, command_line)
    }

    fn notify(&self, notice: Notice) {
        eprintln!("{}: {}", notice_prefix(notice.level), notice.message);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            eprint!("{prompt} [y/N] ");
            let _ = std::io::stderr().flush();
            let mut answer = String::new();
            match std::io::stdin().lock().read_line(&mut answer) {
                Ok(_) => is_affirmative(&answer),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }
}

// ── TUI host ────────────────────────────────────────────────────────────────

/// Messages from background bridge tasks to the TUI loop.
pub enum UiEvent {
    Notice(Notice),
    Confirm {
        prompt: String,
        reply: oneshot::Sender<bool>,
    },
    Listed(Vec<WorkspaceRecord>),
}

/// Host that routes notices and confirmations into the TUI event loop.
pub struct TuiHost {
    launchers: Launchers,
    events: mpsc::UnboundedSender<UiEvent>,
}

impl TuiHost {
    pub fn new(launchers: Launchers, events: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { launchers, events }
    }
}

impl HostSurface for TuiHost {
    fn open_folder(&self, path: &str) -> Result<(), HostError> {
        self.launchers.open_folder(path)
    }

    fn open_terminal(&self, title: &str, command_line: &str) -> Result<(), HostError> {
        self.launchers.open_terminal(title, command_line)
    }

    fn notify(&self, notice: Notice) {
        let _ = self.events.send(UiEvent::Notice(notice));
    }

    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = UiEvent::Confirm {
            prompt: prompt.to_string(),
            reply,
        };
        if self.events.send(request).is_err() {
            return false;
        }
        // A dropped reply (TUI closed) counts as "no".
        answer.await.unwrap_or(false)
    }
}
