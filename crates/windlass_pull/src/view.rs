//! Pull views: the indicator obligation, configuration, and assembly

use crate::bridge::ObserverBridge;
use crate::controller::PullController;
use crate::state::{PullKind, RefreshState};

/// Tunables for a pull view, overridable per indicator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullConfig {
    /// Reserved space on the owned edge, in container units
    pub height: f32,
    /// Fraction of `height` the pull must hold for loading entry
    pub required_trigger_percent: f32,
    /// Seconds for the settle-back animation after loading ends
    pub recover_none_duration: f32,
    /// Seconds for the snap-to-loading animation
    pub recover_loading_duration: f32,
    /// Seconds for the show/hide inset swap
    pub visibility_change_duration: f32,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            height: 54.0,
            required_trigger_percent: 0.95,
            recover_none_duration: 0.25,
            recover_loading_duration: 0.25,
            visibility_change_duration: 0.3,
        }
    }
}

/// Visual hook every concrete pull view variant must supply
///
/// There is no default rendering: implementing this trait is the
/// compile-time obligation that replaces a must-override method. The
/// indicator is called on every state write and renders the pull progress
/// however it likes (arrow rotation, spinner, label).
pub trait PullIndicator: Send {
    /// React to a state write. `trigger_percent` is the pull progress
    /// toward the trigger threshold while Triggering, 0 in every other
    /// state, clamped to `0.0..=1.0`.
    fn on_state_change(&mut self, state: RefreshState, trigger_percent: f32);

    /// Per-variant tunables; the default matches the stock constants
    fn config(&self) -> PullConfig {
        PullConfig::default()
    }
}

/// A header or footer pull view: controller, observer bridge, placement
///
/// Built via [`PullView::header`] or [`PullView::footer`] — the kind is
/// fixed at construction and determines every sign convention downstream.
pub struct PullView {
    pub(crate) controller: PullController,
    pub(crate) bridge: ObserverBridge,
    pub(crate) frame_y: f32,
    pub(crate) visible: bool,
}

impl PullView {
    pub fn header(indicator: impl PullIndicator + 'static) -> Self {
        Self::with_kind(PullKind::Header, Box::new(indicator))
    }

    pub fn footer(indicator: impl PullIndicator + 'static) -> Self {
        Self::with_kind(PullKind::Footer, Box::new(indicator))
    }

    fn with_kind(kind: PullKind, indicator: Box<dyn PullIndicator>) -> Self {
        Self {
            controller: PullController::new(kind, indicator),
            bridge: ObserverBridge::new(),
            frame_y: 0.0,
            visible: true,
        }
    }

    /// Set the refresh callback, fired exactly once per loading entry
    pub fn on_refresh<F>(mut self, callback: F) -> Self
    where
        F: FnMut(PullKind) + Send + 'static,
    {
        self.controller.on_refresh(callback);
        self
    }

    pub fn kind(&self) -> PullKind {
        self.controller.kind()
    }

    pub fn state(&self) -> RefreshState {
        self.controller.state()
    }

    pub fn config(&self) -> PullConfig {
        self.controller.config()
    }

    /// Whether the view currently reserves space and observes the feed
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Vertical placement relative to the content: `-height` for headers,
    /// the content height for footers
    pub fn frame_y(&self) -> f32 {
        self.frame_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl PullIndicator for Plain {
        fn on_state_change(&mut self, _state: RefreshState, _trigger_percent: f32) {}
    }

    struct Tall;

    impl PullIndicator for Tall {
        fn on_state_change(&mut self, _state: RefreshState, _trigger_percent: f32) {}

        fn config(&self) -> PullConfig {
            PullConfig {
                height: 80.0,
                ..PullConfig::default()
            }
        }
    }

    #[test]
    fn test_kind_is_fixed_by_constructor() {
        assert_eq!(PullView::header(Plain).kind(), PullKind::Header);
        assert_eq!(PullView::footer(Plain).kind(), PullKind::Footer);
    }

    #[test]
    fn test_indicator_config_override_is_honored() {
        let view = PullView::header(Tall);
        assert_eq!(view.config().height, 80.0);
        assert_eq!(view.config().required_trigger_percent, 0.95);
    }

    #[test]
    fn test_new_view_starts_at_rest_and_visible() {
        let view = PullView::footer(Plain);
        assert_eq!(view.state(), RefreshState::None);
        assert!(view.is_visible());
    }
}
