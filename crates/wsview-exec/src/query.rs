//! Captured queries against the workspace tool.

use wsview_core::WorkspaceCommand;

use crate::error::ExecError;
use crate::executor::WorkspaceCommandRunner;

/// Execute `workspace --json` and return its raw stdout.
pub fn list_workspaces_raw(runner: &impl WorkspaceCommandRunner) -> Result<String, ExecError> {
    runner.run(&WorkspaceCommand::List.args())
}

/// Execute `workspace --get-base-dir` and return the trimmed path.
pub fn get_base_dir(runner: &impl WorkspaceCommandRunner) -> Result<String, ExecError> {
    let output = runner.run(&WorkspaceCommand::BaseDir.args())?;
    Ok(output.trim().to_string())
}
