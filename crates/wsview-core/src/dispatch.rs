//! Result of handing an action to the host.

/// Outcome of a fire-and-forget action.
///
/// `Dispatched` means the command was submitted to an interactive surface,
/// not that it finished or succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Submitted; completion is not observed.
    Dispatched,
    /// Nothing to do (empty path, no selection).
    Ignored,
    /// The user declined the confirmation prompt.
    Cancelled,
}

impl Dispatch {
    pub fn was_submitted(&self) -> bool {
        matches!(self, Dispatch::Dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dispatched_counts_as_submitted() {
        assert!(Dispatch::Dispatched.was_submitted());
        assert!(!Dispatch::Ignored.was_submitted());
        assert!(!Dispatch::Cancelled.was_submitted());
    }
}
