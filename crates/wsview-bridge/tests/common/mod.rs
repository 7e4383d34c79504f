#![allow(dead_code)]

use std::sync::Mutex;

use wsview_bridge::{HostError, HostSurface, Notice, NoticeLevel};
use wsview_exec::{ExecError, WorkspaceCommandRunner};

/// Scripted workspace tool: fixed answers for `--json` and `--get-base-dir`.
pub struct FakeTool {
    pub list: Result<String, String>,
    pub base_dir: Result<String, String>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeTool {
    pub fn new(list_json: &str, base_dir: &str) -> Self {
        Self {
            list: Ok(list_json.to_string()),
            base_dir: Ok(format!("{base_dir}\n")),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list(stderr: &str) -> Self {
        Self {
            list: Err(stderr.to_string()),
            ..Self::new("[]", "/ws")
        }
    }

    pub fn failing_base_dir(stderr: &str) -> Self {
        Self {
            base_dir: Err(stderr.to_string()),
            ..Self::new("[]", "/ws")
        }
    }

    pub fn call_count(&self, flag: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some(flag))
            .count()
    }
}

impl WorkspaceCommandRunner for FakeTool {
    fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());
        let answer = match args {
            ["--json"] => &self.list,
            ["--get-base-dir"] => &self.base_dir,
            other => panic!("unexpected captured invocation: {other:?}"),
        };
        answer.clone().map_err(|stderr| ExecError::CommandFailed {
            program: "workspace".into(),
            status: "exit 1".into(),
            stderr,
        })
    }
}

/// Host that records every side effect and answers confirmations.
pub struct RecordingHost {
    pub confirm_answer: bool,
    pub terminal_fails: bool,
    pub prompts: Mutex<Vec<String>>,
    pub terminals: Mutex<Vec<(String, String)>>,
    pub folders: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingHost {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            terminal_fails: false,
            prompts: Mutex::new(Vec::new()),
            terminals: Mutex::new(Vec::new()),
            folders: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn terminals(&self) -> Vec<(String, String)> {
        self.terminals.lock().unwrap().clone()
    }

    pub fn notices_at(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl HostSurface for RecordingHost {
    fn open_folder(&self, path: &str) -> Result<(), HostError> {
        self.folders.lock().unwrap().push(path.to_string());
        Ok(())
    }

    fn open_terminal(&self, title: &str, command_line: &str) -> Result<(), HostError> {
        if self.terminal_fails {
            return Err(HostError::Terminal("no server running".into()));
        }
        self.terminals
            .lock()
            .unwrap()
            .push((title.to_string(), command_line.to_string()));
        Ok(())
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm_answer
    }
}

pub fn workspace(name: &str, path: &str) -> wsview_core::WorkspaceRecord {
    wsview_core::WorkspaceRecord {
        name: name.into(),
        status: "running".into(),
        branch: "main".into(),
        last_commit: "abc123".into(),
        path: path.into(),
    }
}
