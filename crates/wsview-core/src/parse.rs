//! Parser for the output of `workspace --json`.

use crate::types::WorkspaceRecord;

/// Parse the JSON array printed by `workspace --json`.
///
/// One record per array element, fields mapped verbatim. Unknown keys are
/// ignored; `name` and `path` are required, the display-only fields default
/// to empty. Anything that is not an array of objects is an error.
pub fn parse_workspace_list(output: &str) -> Result<Vec<WorkspaceRecord>, serde_json::Error> {
    serde_json::from_str(output.trim())
}
