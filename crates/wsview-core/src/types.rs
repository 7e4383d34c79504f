//! Workspace record, the displayed snapshot and the list phase.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One workspace as reported by `workspace --json`.
///
/// Read-only projection: built fresh on every refresh and replaced
/// wholesale by the next one. `status` and `last_commit` are opaque labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRecord {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub last_commit: String,
    pub path: String,
}

impl WorkspaceRecord {
    /// Tree label.
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Secondary text shown next to the label: `[status] branch`.
    pub fn description(&self) -> String {
        format!("[{}] {}", self.status, self.branch)
    }

    /// Hover text: `path - last_commit`.
    pub fn tooltip(&self) -> String {
        format!("{} - {}", self.path, self.last_commit)
    }

    /// Same workspace across two refreshes.
    pub fn same_identity(&self, other: &WorkspaceRecord) -> bool {
        self.name == other.name && self.path == other.path
    }
}

/// Immutable list of records held for display.
///
/// Cloning is cheap; a refresh swaps in a new snapshot instead of editing
/// the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    records: Arc<[WorkspaceRecord]>,
}

impl WorkspaceSnapshot {
    pub fn new(records: Vec<WorkspaceRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[WorkspaceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WorkspaceRecord> {
        self.records.get(index)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&WorkspaceRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Position of the record with the same identity as `record`, if any.
    pub fn position_of(&self, record: &WorkspaceRecord) -> Option<usize> {
        self.records.iter().position(|r| r.same_identity(record))
    }
}

impl From<Vec<WorkspaceRecord>> for WorkspaceSnapshot {
    fn from(records: Vec<WorkspaceRecord>) -> Self {
        Self::new(records)
    }
}

/// Fetch lifecycle of the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Idle,
    Fetching,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, path: &str) -> WorkspaceRecord {
        WorkspaceRecord {
            name: name.into(),
            status: "running".into(),
            branch: "main".into(),
            last_commit: "abc123".into(),
            path: path.into(),
        }
    }

    #[test]
    fn description_and_tooltip() {
        let r = record("foo", "/ws/foo");
        assert_eq!(r.label(), "foo");
        assert_eq!(r.description(), "[running] main");
        assert_eq!(r.tooltip(), "/ws/foo - abc123");
    }

    #[test]
    fn identity_ignores_status_and_branch() {
        let a = record("foo", "/ws/foo");
        let mut b = a.clone();
        b.status = "idle".into();
        b.branch = "feat/x".into();
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&record("foo", "/ws/other")));
    }

    #[test]
    fn snapshot_lookup() {
        let snap = WorkspaceSnapshot::new(vec![record("a", "/ws/a"), record("b", "/ws/b")]);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.find_by_name("b").map(|r| r.path.as_str()), Some("/ws/b"));
        assert!(snap.find_by_name("c").is_none());
        assert_eq!(snap.position_of(&record("b", "/ws/b")), Some(1));
    }

    #[test]
    fn snapshot_clone_shares_records() {
        let snap = WorkspaceSnapshot::new(vec![record("a", "/ws/a")]);
        let copy = snap.clone();
        assert!(std::ptr::eq(snap.records().as_ptr(), copy.records().as_ptr()));
    }

    #[test]
    fn default_snapshot_is_empty() {
        let snap = WorkspaceSnapshot::default();
        assert!(snap.is_empty());
        assert!(snap.get(0).is_none());
        assert_eq!(ListPhase::default(), ListPhase::Idle);
    }
}
