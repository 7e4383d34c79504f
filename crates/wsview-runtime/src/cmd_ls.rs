//! `wsview ls`: workspace tree.
//! One `[status] branch` line per workspace, its path and commit below.

use wsview_bridge::{HostSurface, WorkspaceBridge};
use wsview_core::WorkspaceRecord;
use wsview_exec::WorkspaceCommandRunner;

use crate::context::{short_path, status_color, truncate};

const BRANCH_WIDTH: usize = 30;
const COMMIT_WIDTH: usize = 60;

/// Entry point for `wsview ls`.
///
/// Listing failures were already reported by the bridge; they show up here
/// as an empty list.
pub async fn cmd_ls<R, H>(bridge: &WorkspaceBridge<R, H>, use_color: bool) -> anyhow::Result<()>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let records = bridge.list_workspaces().await;
    let output = format_ls(&records, use_color);
    if output.is_empty() {
        eprintln!("(no workspaces)");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Render the tree. Empty input renders as an empty string.
pub(crate) fn format_ls(records: &[WorkspaceRecord], use_color: bool) -> String {
    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(records.len() * 2);
    for (idx, record) in records.iter().enumerate() {
        let last = idx + 1 == records.len();
        let name = format!("{:<width$}", record.name, width = name_width);
        let branch = truncate(&record.branch, BRANCH_WIDTH);

        if use_color {
            lines.push(format!(
                "\x1b[1m{name}\x1b[0m  {}[{}]\x1b[0m {branch}",
                status_color(&record.status),
                record.status,
            ));
        } else {
            lines.push(format!("{name}  [{}] {branch}", record.status));
        }

        let connector = if last { "\u{2514}" } else { "\u{251c}" };
        let detail = format!(
            "{} - {}",
            short_path(&record.path),
            truncate(&record.last_commit, COMMIT_WIDTH)
        );
        if use_color {
            lines.push(format!("{connector} \x1b[2m{detail}\x1b[0m"));
        } else {
            lines.push(format!("{connector} {detail}"));
        }
    }
    lines.join("\n")
}
