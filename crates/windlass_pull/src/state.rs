//! Refresh states and the transition table

use windlass_core::events::{refresh_events, EventType};
use windlass_core::StateTransitions;

/// Discrete states of a pull view's refresh cycle
///
/// The cycle is `None → Triggering → Triggered → Loading → CanFinish →
/// None`. States only change inside the controller's evaluation path;
/// nothing else writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshState {
    /// At rest, no pull in progress
    #[default]
    None,
    /// Pulled past the appear offset, short of the trigger threshold
    Triggering,
    /// Pulled at least one view height past the appear offset
    Triggered,
    /// Refresh in flight; exits only through `end_refreshing`
    Loading,
    /// Loading finished, waiting to settle back to rest
    CanFinish,
}

impl StateTransitions for RefreshState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use refresh_events::*;
        match (self, event) {
            (RefreshState::None, PULL_STARTED) => Some(RefreshState::Triggering),
            (RefreshState::Triggering, THRESHOLD_CROSSED) => Some(RefreshState::Triggered),
            (RefreshState::Triggering, PULL_ABANDONED) => Some(RefreshState::None),
            (RefreshState::Triggered, PULL_RETREATED) => Some(RefreshState::Triggering),
            (RefreshState::Triggered, RELEASED) => Some(RefreshState::Loading),
            (RefreshState::Loading, FINISHED) => Some(RefreshState::CanFinish),
            (RefreshState::CanFinish, SETTLED) => Some(RefreshState::None),
            _ => None,
        }
    }
}

/// Which edge a pull view serves; fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullKind {
    /// Pull-down-to-refresh above the content
    Header,
    /// Pull-up-to-load-more below the content
    Footer,
}

impl PullKind {
    pub fn is_header(&self) -> bool {
        matches!(self, PullKind::Header)
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            PullKind::Header => "header",
            PullKind::Footer => "footer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windlass_core::events::refresh_events::*;

    #[test]
    fn test_full_cycle() {
        let mut state = RefreshState::None;
        for (event, expected) in [
            (PULL_STARTED, RefreshState::Triggering),
            (THRESHOLD_CROSSED, RefreshState::Triggered),
            (RELEASED, RefreshState::Loading),
            (FINISHED, RefreshState::CanFinish),
            (SETTLED, RefreshState::None),
        ] {
            state = state.on_event(event).unwrap();
            assert_eq!(state, expected);
        }
    }

    #[test]
    fn test_none_cannot_skip_to_triggered() {
        // Crossing the full threshold from rest still has to pass
        // through Triggering first
        assert_eq!(RefreshState::None.on_event(THRESHOLD_CROSSED), None);
        assert_eq!(RefreshState::None.on_event(RELEASED), None);
    }

    #[test]
    fn test_triggered_can_retreat() {
        assert_eq!(
            RefreshState::Triggered.on_event(PULL_RETREATED),
            Some(RefreshState::Triggering)
        );
        assert_eq!(
            RefreshState::Triggering.on_event(PULL_ABANDONED),
            Some(RefreshState::None)
        );
    }

    #[test]
    fn test_stale_settle_is_dropped_outside_can_finish() {
        // A deferred SETTLED that fires after the state moved on is a no-op
        assert_eq!(RefreshState::None.on_event(SETTLED), None);
        assert_eq!(RefreshState::Triggering.on_event(SETTLED), None);
        assert_eq!(RefreshState::Loading.on_event(SETTLED), None);
    }

    #[test]
    fn test_loading_only_exits_through_finished() {
        assert_eq!(RefreshState::Loading.on_event(PULL_STARTED), None);
        assert_eq!(RefreshState::Loading.on_event(RELEASED), None);
        assert_eq!(
            RefreshState::Loading.on_event(FINISHED),
            Some(RefreshState::CanFinish)
        );
    }
}
