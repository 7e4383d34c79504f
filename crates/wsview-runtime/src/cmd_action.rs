//! One-shot workspace actions: `base-dir`, `open`, `warm`, `doctor`, `delete`.
//!
//! Actions that go through the bridge have already reported failures via
//! the host, so they return an exit code instead of an error.

use wsview_bridge::{BridgeError, HostSurface, Notice, WorkspaceBridge};
use wsview_core::{Dispatch, WorkspaceRecord, WorkspaceSnapshot};
use wsview_exec::WorkspaceCommandRunner;

/// Exit code for an action outcome. Declining the prompt is not success.
pub(crate) fn exit_code(outcome: &Result<Dispatch, BridgeError>) -> i32 {
    match outcome {
        Ok(Dispatch::Dispatched) | Ok(Dispatch::Ignored) => 0,
        Ok(Dispatch::Cancelled) => 1,
        Err(_) => 1,
    }
}

/// Resolve `name` against a fresh listing.
async fn resolve<R, H>(bridge: &WorkspaceBridge<R, H>, name: &str) -> anyhow::Result<WorkspaceRecord>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let records = bridge.try_list_workspaces().await.map_err(|e| match e {
        BridgeError::Parse(_) => anyhow::anyhow!("Error parsing workspace data."),
        other => anyhow::anyhow!("Error fetching workspaces: {other}"),
    })?;
    WorkspaceSnapshot::from(records)
        .find_by_name(name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no workspace named {name:?}"))
}

/// Entry point for `wsview base-dir`.
pub async fn cmd_base_dir<R, H>(bridge: &WorkspaceBridge<R, H>) -> anyhow::Result<()>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let base = bridge.get_base_directory().await?;
    println!("{base}");
    Ok(())
}

/// Entry point for `wsview open <name>`.
pub async fn cmd_open<R, H>(bridge: &WorkspaceBridge<R, H>, name: &str) -> anyhow::Result<i32>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let record = resolve(bridge, name).await?;
    Ok(exit_code(&bridge.open(&record.path).await))
}

/// Entry point for `wsview warm <name>`.
pub async fn cmd_warm<R, H>(bridge: &WorkspaceBridge<R, H>, name: &str) -> anyhow::Result<i32>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let record = resolve(bridge, name).await?;
    Ok(exit_code(&bridge.warm(Some(record.label())).await))
}

/// Entry point for `wsview doctor`.
pub async fn cmd_doctor<R, H>(bridge: &WorkspaceBridge<R, H>) -> i32
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    exit_code(&bridge.doctor().await)
}

/// Entry point for `wsview delete <name>`.
pub async fn cmd_delete<R, H>(bridge: &WorkspaceBridge<R, H>, name: &str) -> anyhow::Result<i32>
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let record = resolve(bridge, name).await?;
    let outcome = bridge.delete(&record).await;
    if let Ok(ref dispatch) = outcome {
        bridge.host().notify(delete_notice(&record, dispatch));
    }
    Ok(exit_code(&outcome))
}

/// Follow-up shown once the bridge has handled a delete without error.
pub(crate) fn delete_notice(record: &WorkspaceRecord, dispatch: &Dispatch) -> Notice {
    if dispatch.was_submitted() {
        Notice::info(format!("Deleting: {} (running in tmux)", record.name))
    } else {
        Notice::info(format!("Kept workspace {}", record.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wsview_bridge::{HostError, NoticeLevel};
    use wsview_exec::ExecError;

    const LIST: &str = r#"[
        {"name":"foo","status":"idle","branch":"main","last_commit":"abc","path":"/ws/foo"},
        {"name":"rogue","status":"idle","branch":"main","last_commit":"abc","path":"/elsewhere/rogue"}
    ]"#;

    struct ScriptedTool;

    impl WorkspaceCommandRunner for ScriptedTool {
        fn run(&self, args: &[&str]) -> Result<String, ExecError> {
            match args {
                ["--json"] => Ok(LIST.to_string()),
                ["--get-base-dir"] => Ok("/ws\n".to_string()),
                other => Err(ExecError::NotFound(format!("{other:?}"))),
            }
        }
    }

    struct Host {
        yes: bool,
        terminals: Mutex<Vec<(String, String)>>,
        folders: Mutex<Vec<String>>,
        notices: Mutex<Vec<Notice>>,
    }

    impl Host {
        fn new(yes: bool) -> Self {
            Self {
                yes,
                terminals: Mutex::new(Vec::new()),
                folders: Mutex::new(Vec::new()),
                notices: Mutex::new(Vec::new()),
            }
        }
    }

    impl HostSurface for Host {
        fn open_folder(&self, path: &str) -> Result<(), HostError> {
            self.folders.lock().unwrap().push(path.to_string());
            Ok(())
        }

        fn open_terminal(&self, title: &str, command_line: &str) -> Result<(), HostError> {
            self.terminals
                .lock()
                .unwrap()
                .push((title.to_string(), command_line.to_string()));
            Ok(())
        }

        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }

        async fn confirm(&self, _prompt: &str) -> bool {
            self.yes
        }
    }

    fn bridge(yes: bool) -> WorkspaceBridge<ScriptedTool, Host> {
        WorkspaceBridge::new(ScriptedTool, Host::new(yes))
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&Ok(Dispatch::Dispatched)), 0);
        assert_eq!(exit_code(&Ok(Dispatch::Ignored)), 0);
        assert_eq!(exit_code(&Ok(Dispatch::Cancelled)), 1);
        assert_eq!(
            exit_code(&Err(BridgeError::Task("panicked".into()))),
            1
        );
    }

    #[tokio::test]
    async fn open_resolves_path_by_name() {
        let bridge = bridge(true);
        assert_eq!(cmd_open(&bridge, "foo").await.expect("ok"), 0);
        assert_eq!(*bridge.host().folders.lock().unwrap(), ["/ws/foo"]);
    }

    #[tokio::test]
    async fn unknown_name_is_an_error() {
        let bridge = bridge(true);
        let err = cmd_open(&bridge, "nope").await.unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert!(bridge.host().folders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn warm_uses_workspace_label_as_title() {
        let bridge = bridge(true);
        assert_eq!(cmd_warm(&bridge, "foo").await.expect("ok"), 0);
        assert_eq!(
            *bridge.host().terminals.lock().unwrap(),
            [("Workspace: foo".to_string(), "workspace warm".to_string())]
        );
    }

    #[tokio::test]
    async fn delete_inside_base_is_submitted() {
        let bridge = bridge(true);
        assert_eq!(cmd_delete(&bridge, "foo").await.expect("ok"), 0);
        assert_eq!(
            *bridge.host().terminals.lock().unwrap(),
            [("Deleting: foo".to_string(), "workspace delete 'foo'".to_string())]
        );
        assert_eq!(
            *bridge.host().notices.lock().unwrap(),
            [Notice::info("Deleting: foo (running in tmux)")]
        );
    }

    #[tokio::test]
    async fn delete_outside_base_exits_nonzero() {
        let bridge = bridge(true);
        assert_eq!(cmd_delete(&bridge, "rogue").await.expect("ok"), 1);
        assert!(bridge.host().terminals.lock().unwrap().is_empty());
        assert_eq!(bridge.host().notices.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn declined_delete_exits_nonzero() {
        let bridge = bridge(false);
        assert_eq!(cmd_delete(&bridge, "foo").await.expect("ok"), 1);
        assert!(bridge.host().terminals.lock().unwrap().is_empty());
        let notices = bridge.host().notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[0].message, "Kept workspace foo");
    }

    #[tokio::test]
    async fn base_dir_succeeds() {
        let bridge = bridge(true);
        assert!(cmd_base_dir(&bridge).await.is_ok());
    }
}
