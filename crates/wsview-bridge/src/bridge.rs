//! WorkspaceBridge: user actions in, external tool invocations out.

use std::sync::Arc;
use std::time::Duration;

use wsview_core::{
    Dispatch, WorkspaceCommand, WorkspaceRecord, ensure_within_base, parse_workspace_list,
};
use wsview_exec::{ExecError, WorkspaceCommandRunner, get_base_dir, list_workspaces_raw};

use crate::error::BridgeError;
use crate::host::{HostSurface, Notice};
use crate::refresh::RefreshSignal;

/// Wait between submitting a delete and re-listing.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Delay before the unconditional refresh that follows a delete.
    pub refresh_delay: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            refresh_delay: DEFAULT_REFRESH_DELAY,
        }
    }
}

pub struct WorkspaceBridge<R, H> {
    runner: Arc<R>,
    host: Arc<H>,
    refresh: RefreshSignal,
    config: BridgeConfig,
}

impl<R, H> Clone for WorkspaceBridge<R, H> {
    fn clone(&self) -> Self {
        Self {
            runner: Arc::clone(&self.runner),
            host: Arc::clone(&self.host),
            refresh: self.refresh.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, H> WorkspaceBridge<R, H>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    pub fn new(runner: R, host: H) -> Self {
        Self::with_config(runner, host, BridgeConfig::default())
    }

    pub fn with_config(runner: R, host: H, config: BridgeConfig) -> Self {
        Self {
            runner: Arc::new(runner),
            host: Arc::new(host),
            refresh: RefreshSignal::new(),
            config,
        }
    }

    pub fn refresh_signal(&self) -> &RefreshSignal {
        &self.refresh
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// List workspaces, degrading to an empty list on any failure.
    ///
    /// Never returns an error: invocation and parse failures are reported
    /// through the host as warnings so the list view stays usable.
    pub async fn list_workspaces(&self) -> Vec<WorkspaceRecord> {
        match self.try_list_workspaces().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "listed workspaces");
                records
            }
            Err(BridgeError::Parse(e)) => {
                tracing::warn!(error = %e, "workspace list output is malformed");
                self.host
                    .notify(Notice::warning("Error parsing workspace data."));
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "workspace list failed");
                self.host
                    .notify(Notice::warning(format!("Error fetching workspaces: {e}")));
                Vec::new()
            }
        }
    }

    /// List workspaces, propagating the failure kind.
    pub async fn try_list_workspaces(&self) -> Result<Vec<WorkspaceRecord>, BridgeError> {
        let output = self.run_blocking(|runner| list_workspaces_raw(runner)).await?;
        Ok(parse_workspace_list(&output)?)
    }

    /// Ask the tool for its base directory. Errors propagate.
    pub async fn get_base_directory(&self) -> Result<String, BridgeError> {
        self.run_blocking(|runner| get_base_dir(runner)).await
    }

    /// Open `path` as a new editor window. Empty paths are ignored.
    pub async fn open(&self, path: &str) -> Result<Dispatch, BridgeError> {
        let path = path.trim();
        if path.is_empty() {
            return Ok(Dispatch::Ignored);
        }
        let host = Arc::clone(&self.host);
        let target = path.to_string();
        let result = tokio::task::spawn_blocking(move || host.open_folder(&target)).await?;
        match result {
            Ok(()) => {
                tracing::info!(path, "opened workspace");
                Ok(Dispatch::Dispatched)
            }
            Err(e) => {
                self.host.notify(Notice::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Run `workspace warm` in a terminal named after the selected workspace.
    ///
    /// Without a selection there is nothing to warm.
    pub async fn warm(&self, label: Option<&str>) -> Result<Dispatch, BridgeError> {
        let Some(label) = label.filter(|l| !l.is_empty()) else {
            return Ok(Dispatch::Ignored);
        };
        self.submit_interactive(&format!("Workspace: {label}"), &WorkspaceCommand::Warm)
            .await
            .inspect_err(|e| self.host.notify(Notice::error(e.to_string())))
    }

    /// Run `workspace doctor` in its own terminal.
    pub async fn doctor(&self) -> Result<Dispatch, BridgeError> {
        self.submit_interactive("Workspace Doctor", &WorkspaceCommand::Doctor)
            .await
            .inspect_err(|e| self.host.notify(Notice::error(e.to_string())))
    }

    /// Signal that the displayed list is stale. Does not fetch.
    pub fn refresh(&self) {
        self.refresh.fire();
    }

    /// Delete a workspace after confirmation and a fresh base-dir check.
    ///
    /// The delete command is submitted to a terminal and not awaited; a
    /// refresh follows after `refresh_delay` whether or not it succeeded.
    /// Any failure before submission blocks the command, is reported, and
    /// refreshes immediately.
    pub async fn delete(&self, workspace: &WorkspaceRecord) -> Result<Dispatch, BridgeError> {
        let prompt = format!(
            "Are you sure you want to delete the workspace \"{}\"?",
            workspace.name
        );
        if !self.host.confirm(&prompt).await {
            tracing::debug!(name = %workspace.name, "delete cancelled");
            return Ok(Dispatch::Cancelled);
        }

        match self.validate_and_submit_delete(workspace).await {
            Ok(dispatch) => {
                self.schedule_refresh();
                Ok(dispatch)
            }
            Err(e) => {
                match &e {
                    BridgeError::Validation(rejection) => {
                        tracing::error!(
                            name = %workspace.name,
                            path = %workspace.path,
                            %rejection,
                            "blocked delete outside base directory"
                        );
                        self.host.notify(Notice::error(
                            "Cannot delete a workspace outside of the workspace base directory.",
                        ));
                    }
                    other => {
                        tracing::warn!(name = %workspace.name, error = %other, "delete failed");
                        self.host
                            .notify(Notice::error(format!("Error deleting workspace: {other}")));
                    }
                }
                self.refresh();
                Err(e)
            }
        }
    }

    async fn validate_and_submit_delete(
        &self,
        workspace: &WorkspaceRecord,
    ) -> Result<Dispatch, BridgeError> {
        // Always re-fetch: the base directory may have moved since listing.
        let base = self.get_base_directory().await?;
        ensure_within_base(&workspace.path, &base)?;

        let command = WorkspaceCommand::Delete {
            name: workspace.name.clone(),
        };
        self.submit_interactive(&format!("Deleting: {}", workspace.name), &command)
            .await
    }

    async fn submit_interactive(
        &self,
        title: &str,
        command: &WorkspaceCommand,
    ) -> Result<Dispatch, BridgeError> {
        let line = command.command_line(self.runner.program());
        let host = Arc::clone(&self.host);
        let title = title.to_string();
        tracing::debug!(%title, %line, "submitting interactive command");
        tokio::task::spawn_blocking(move || host.open_terminal(&title, &line)).await??;
        Ok(Dispatch::Dispatched)
    }

    fn schedule_refresh(&self) {
        let signal = self.refresh.clone();
        let delay = self.config.refresh_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            signal.fire();
        });
    }

    async fn run_blocking<T, F>(&self, f: F) -> Result<T, BridgeError>
    where
        T: Send + 'static,
        F: FnOnce(&R) -> Result<T, ExecError> + Send + 'static,
    {
        let runner = Arc::clone(&self.runner);
        let result = tokio::task::spawn_blocking(move || f(runner.as_ref())).await?;
        Ok(result?)
    }
}
