//! `wsview json`: machine-readable JSON output.

use wsview_bridge::{BridgeError, HostSurface, WorkspaceBridge};
use wsview_core::WorkspaceRecord;
use wsview_exec::WorkspaceCommandRunner;

/// Convert a single record to JSON schema v1 representation.
///
/// Empty display fields become `null` so consumers can tell "missing"
/// from a real value.
fn workspace_to_json_v1(record: &WorkspaceRecord) -> serde_json::Value {
    serde_json::json!({
        "name": record.name,
        "path": record.path,
        "status": non_empty(&record.status),
        "branch": non_empty(&record.branch),
        "last_commit": non_empty(&record.last_commit),
        "label": record.label(),
        "description": record.description(),
    })
}

fn non_empty(value: &str) -> serde_json::Value {
    if value.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::Value::String(value.to_string())
    }
}

/// Build the full JSON schema v1 output.
pub(crate) fn build_json_v1(
    records: &[WorkspaceRecord],
    generated_at: chrono::DateTime<chrono::Utc>,
) -> serde_json::Value {
    let workspaces: Vec<serde_json::Value> = records.iter().map(workspace_to_json_v1).collect();

    serde_json::json!({
        "version": 1,
        "generated_at": generated_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "workspaces": workspaces,
    })
}

/// Entry point for `wsview json`.
///
/// Unlike `ls`, listing failures are errors here: an empty array would be
/// indistinguishable from a machine with no workspaces.
pub async fn cmd_json<R, H>(bridge: &WorkspaceBridge<R, H>) -> anyhow::Result<()>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let records = bridge.try_list_workspaces().await.map_err(|e| match e {
        BridgeError::Parse(_) => anyhow::anyhow!("Error parsing workspace data."),
        other => anyhow::anyhow!("Error fetching workspaces: {other}"),
    })?;

    let output = build_json_v1(&records, chrono::Utc::now());
    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");

    Ok(())
}
