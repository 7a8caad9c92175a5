//! State machine seam
//!
//! Interaction states are plain enums that map events to transitions by
//! implementing [`StateTransitions`]. The owning component decides when
//! to feed events in; an event with no matching edge is dropped, which is
//! what makes repeated or stale dispatches safe.

use crate::events::EventType;

/// Trait for state types that can handle event transitions
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum LoadState {
///     #[default]
///     Idle,
///     Busy,
/// }
///
/// impl StateTransitions for LoadState {
///     fn on_event(&self, event: EventType) -> Option<Self> {
///         match (self, event) {
///             (LoadState::Idle, START) => Some(LoadState::Busy),
///             (LoadState::Busy, DONE) => Some(LoadState::Idle),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}
