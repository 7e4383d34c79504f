//! WorkspaceCommandRunner trait and WorkspaceExecutor (sync subprocess wrapper).

use std::process::{Command, Output};

use wsview_core::DEFAULT_WORKSPACE_BIN;

use crate::error::ExecError;

/// Trait for executing the workspace tool. Enables mock injection for testing.
pub trait WorkspaceCommandRunner: Send + Sync {
    /// Run with `args` and return stdout, or an error carrying stderr.
    fn run(&self, args: &[&str]) -> Result<String, ExecError>;

    /// Program name used when building interactive command lines.
    fn program(&self) -> &str {
        DEFAULT_WORKSPACE_BIN
    }
}

impl<T: WorkspaceCommandRunner + ?Sized> WorkspaceCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        (**self).run(args)
    }

    fn program(&self) -> &str {
        (**self).program()
    }
}

impl<T: WorkspaceCommandRunner + ?Sized> WorkspaceCommandRunner for std::sync::Arc<T> {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        (**self).run(args)
    }

    fn program(&self) -> &str {
        (**self).program()
    }
}

/// Real executor using `std::process::Command`.
///
/// Each call spawns a fresh process with an explicit argv; no shell is
/// involved, so arguments are never re-interpreted.
pub struct WorkspaceExecutor {
    bin: String,
}

impl WorkspaceExecutor {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn run_raw(&self, args: &[&str]) -> Result<Output, ExecError> {
        Command::new(&self.bin).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExecError::NotFound(self.bin.clone())
            } else {
                ExecError::Io(e)
            }
        })
    }
}

impl Default for WorkspaceExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_WORKSPACE_BIN)
    }
}

impl WorkspaceCommandRunner for WorkspaceExecutor {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        tracing::debug!(bin = %self.bin, ?args, "running workspace tool");
        let output = self.run_raw(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExecError::CommandFailed {
                program: self.bin.clone(),
                status: output
                    .status
                    .code()
                    .map(|c| format!("exit {c}"))
                    .unwrap_or_else(|| "signal".into()),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn program(&self) -> &str {
        &self.bin
    }
}
