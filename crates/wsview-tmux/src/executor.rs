//! TmuxCommandRunner trait and the subprocess-backed TmuxExecutor.

use std::process::Command;

use crate::error::TmuxError;

/// Runs one tmux invocation and returns its stdout. Mock seam for tests.
pub trait TmuxCommandRunner: Send + Sync {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;
}

impl<T: TmuxCommandRunner + ?Sized> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        (**self).run(args)
    }
}

/// Which tmux server to talk to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServerTarget {
    /// Whatever `$TMUX` / the default socket resolves to.
    #[default]
    Default,
    /// `-S <path>`
    SocketPath(String),
    /// `-L <name>`
    SocketName(String),
}

impl ServerTarget {
    fn args(&self) -> Vec<&str> {
        match self {
            ServerTarget::Default => Vec::new(),
            ServerTarget::SocketPath(path) => vec!["-S", path.as_str()],
            ServerTarget::SocketName(name) => vec!["-L", name.as_str()],
        }
    }
}

pub struct TmuxExecutor {
    bin: String,
    target: ServerTarget,
}

impl TmuxExecutor {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            target: ServerTarget::Default,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: ServerTarget) -> Self {
        self.target = target;
        self
    }

    pub fn target(&self) -> &ServerTarget {
        &self.target
    }

    /// Full argv after the binary: server selection first, then `args`.
    fn argv<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut argv = self.target.args();
        argv.extend_from_slice(args);
        argv
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let argv = self.argv(args);
        tracing::debug!(bin = %self.bin, ?argv, "running tmux");
        let output = Command::new(&self.bin).args(&argv).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TmuxError::NotFound
            } else {
                TmuxError::Io(e)
            }
        })?;
        if !output.status.success() {
            return Err(TmuxError::CommandFailed {
                subcommand: args.first().copied().unwrap_or_default().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
