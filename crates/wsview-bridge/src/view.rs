//! Displayed list state: current snapshot plus fetch phase.

use wsview_core::{ListPhase, WorkspaceRecord, WorkspaceSnapshot};

/// Owner of the displayed snapshot.
///
/// Fetches are not coalesced: each `begin_fetch` must be matched by one
/// `complete`, and whichever completion arrives last defines what is shown.
/// The phase returns to `Idle` once every outstanding fetch has completed.
#[derive(Debug, Default)]
pub struct WorkspaceView {
    snapshot: WorkspaceSnapshot,
    in_flight: usize,
}

impl WorkspaceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &WorkspaceSnapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> ListPhase {
        if self.in_flight > 0 {
            ListPhase::Fetching
        } else {
            ListPhase::Idle
        }
    }

    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    /// Swap in the result of one fetch (possibly empty after a failure).
    pub fn complete(&mut self, records: Vec<WorkspaceRecord>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.snapshot = WorkspaceSnapshot::new(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> WorkspaceRecord {
        WorkspaceRecord {
            name: name.into(),
            status: "idle".into(),
            branch: "main".into(),
            last_commit: "0000000".into(),
            path: format!("/ws/{name}"),
        }
    }

    #[test]
    fn fetch_cycle_returns_to_idle() {
        let mut view = WorkspaceView::new();
        assert_eq!(view.phase(), ListPhase::Idle);
        view.begin_fetch();
        assert_eq!(view.phase(), ListPhase::Fetching);
        view.complete(vec![record("a")]);
        assert_eq!(view.phase(), ListPhase::Idle);
        assert_eq!(view.snapshot().len(), 1);
    }

    #[test]
    fn failed_fetch_still_converges_with_empty_list() {
        let mut view = WorkspaceView::new();
        view.begin_fetch();
        view.complete(vec![record("a")]);
        view.begin_fetch();
        view.complete(Vec::new());
        assert_eq!(view.phase(), ListPhase::Idle);
        assert!(view.snapshot().is_empty());
    }

    #[test]
    fn overlapping_fetches_last_completion_wins() {
        let mut view = WorkspaceView::new();
        view.begin_fetch();
        view.begin_fetch();
        view.complete(vec![record("second")]);
        assert_eq!(view.phase(), ListPhase::Fetching);
        view.complete(vec![record("first"), record("extra")]);
        assert_eq!(view.phase(), ListPhase::Idle);
        assert_eq!(view.snapshot().records()[0].name, "first");
    }

    #[test]
    fn complete_replaces_rather_than_mutates() {
        let mut view = WorkspaceView::new();
        view.begin_fetch();
        view.complete(vec![record("a")]);
        let held = view.snapshot().clone();
        view.begin_fetch();
        view.complete(vec![record("b")]);
        assert_eq!(held.records()[0].name, "a");
        assert_eq!(view.snapshot().records()[0].name, "b");
    }

    #[test]
    fn stray_completion_does_not_underflow() {
        let mut view = WorkspaceView::new();
        view.complete(Vec::new());
        assert_eq!(view.phase(), ListPhase::Idle);
    }
}
