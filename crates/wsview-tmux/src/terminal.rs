//! TmuxTerminal: open a window, submit a command line, focus it.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// The window a command line was typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalHandle {
    pub pane_id: String,
    pub title: String,
}

/// Terminal surface on top of a tmux runner.
pub struct TmuxTerminal<R> {
    runner: R,
}

/// Escape `#` so tmux shows `name` literally instead of expanding it.
///
/// Window names passed to `-n` are format-expanded, and `#(...)` runs a
/// shell command. `##` is tmux's literal `#`.
fn escape_format(name: &str) -> String {
    name.replace('#', "##")
}

impl<R: TmuxCommandRunner> TmuxTerminal<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Open a new window named `title` and type `command_line` into it.
    ///
    /// `new-window` without `-d` makes the window current. The line is sent
    /// literally (`-l`) so tmux never interprets key names inside it, then a
    /// separate `Enter` submits it. `title` may come from the workspace
    /// tool, so it is escaped before tmux sees it.
    pub fn submit(&self, title: &str, command_line: &str) -> Result<TerminalHandle, TmuxError> {
        let window_name = escape_format(title);
        let output = self
            .runner
            .run(&["new-window", "-P", "-F", "#{pane_id}", "-n", &window_name])?;
        let pane_id = output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| TmuxError::MissingPaneId(title.to_string()))?
            .to_string();

        self.runner
            .run(&["send-keys", "-t", &pane_id, "-l", command_line])?;
        self.runner.run(&["send-keys", "-t", &pane_id, "Enter"])?;

        tracing::debug!(%pane_id, title, "submitted command to terminal");
        Ok(TerminalHandle {
            pane_id,
            title: title.to_string(),
        })
    }
}
