//! Scroll observer bridge
//!
//! Filters the container's change feed before anything reaches the state
//! machine: no-op offset notifications are dropped, content-size changes
//! only re-place the view, and inset captures are gated so the baseline
//! never absorbs the pull view's own adjustments. Subscription is a
//! latch — attaching twice or detaching while detached is a no-op.

use smallvec::SmallVec;

use windlass_core::EdgeInsets;

use crate::container::ScrollSnapshot;
use crate::controller::{Command, Commands, PullController};
use crate::feed::ScrollChange;
use crate::state::RefreshState;

/// Routes feed changes into one pull view's controller
pub struct ObserverBridge {
    attached: bool,
    /// Insets this pull view commanded itself; their arrival is consumed
    /// without touching the baseline
    expected_insets: SmallVec<[EdgeInsets; 2]>,
}

impl ObserverBridge {
    pub fn new() -> Self {
        Self {
            attached: false,
            expected_insets: SmallVec::new(),
        }
    }

    /// Subscribe to the feed; attaching twice is a no-op
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Unsubscribe; queued changes stop being delivered immediately.
    /// Detaching while detached is a no-op.
    pub fn detach(&mut self) {
        self.attached = false;
        self.expected_insets.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Remember an inset this view is about to command so its arrival is
    /// not mistaken for an external change
    pub fn expect_inset(&mut self, inset: EdgeInsets) {
        self.expected_insets.push(inset);
    }

    /// Deliver one change, returning commands for the dock to apply
    pub fn route(
        &mut self,
        change: &ScrollChange,
        snap: &ScrollSnapshot,
        controller: &mut PullController,
    ) -> Commands {
        let mut commands = Commands::new();
        if !self.attached {
            return commands;
        }
        match change {
            ScrollChange::Offset { old, new } => {
                if new == old {
                    tracing::trace!("offset notification without a change, dropped");
                } else {
                    commands = controller.evaluate(snap);
                }
            }
            ScrollChange::ContentSize { old, new } => {
                // Keeps a footer pinned to the true bottom as content
                // grows or shrinks; never drives the state machine
                if new != old {
                    let y = if controller.kind().is_header() {
                        -controller.config().height
                    } else {
                        new.height
                    };
                    commands.push(Command::PlaceView { y });
                }
            }
            ScrollChange::Inset { new, .. } => {
                if let Some(found) = self.expected_insets.iter().position(|inset| inset == new) {
                    self.expected_insets.remove(found);
                    tracing::trace!("own inset adjustment arrived, baseline untouched");
                } else if controller.state() == RefreshState::Loading {
                    // The loading-entry adjustment must not become the
                    // baseline or the reservation would double-count
                    tracing::trace!("inset change ignored while loading");
                } else {
                    controller.set_origin_insets(*new);
                }
            }
        }
        commands
    }
}

impl Default for ObserverBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PullKind;
    use crate::view::{PullConfig, PullIndicator};
    use windlass_core::{Point, Size};

    struct Quiet;

    impl PullIndicator for Quiet {
        fn on_state_change(&mut self, _state: RefreshState, _trigger_percent: f32) {}
    }

    fn footer_parts() -> (ObserverBridge, PullController) {
        let mut bridge = ObserverBridge::new();
        bridge.attach();
        (
            bridge,
            PullController::new(PullKind::Footer, Box::new(Quiet)),
        )
    }

    fn snap(offset_y: f32, dragging: bool) -> ScrollSnapshot {
        ScrollSnapshot {
            offset_y,
            content_height: 1000.0,
            bounds_height: 800.0,
            dragging,
        }
    }

    #[test]
    fn test_noop_offset_is_dropped() {
        let (mut bridge, mut ctrl) = footer_parts();
        let change = ScrollChange::Offset {
            old: Point::new(0.0, 210.0),
            new: Point::new(0.0, 210.0),
        };

        // 210 is past the footer appear offset; a forwarded change would
        // move the machine to Triggering
        bridge.route(&change, &snap(210.0, true), &mut ctrl);
        assert_eq!(ctrl.state(), RefreshState::None);
    }

    #[test]
    fn test_offset_change_drives_the_machine() {
        let (mut bridge, mut ctrl) = footer_parts();
        let change = ScrollChange::Offset {
            old: Point::ZERO,
            new: Point::new(0.0, 210.0),
        };

        bridge.route(&change, &snap(210.0, true), &mut ctrl);
        assert_eq!(ctrl.state(), RefreshState::Triggering);
    }

    #[test]
    fn test_content_size_change_replaces_the_view() {
        let (mut bridge, mut ctrl) = footer_parts();
        let change = ScrollChange::ContentSize {
            old: Size::new(390.0, 1000.0),
            new: Size::new(390.0, 1400.0),
        };

        let commands = bridge.route(&change, &snap(0.0, false), &mut ctrl);
        assert_eq!(commands.as_slice(), &[Command::PlaceView { y: 1400.0 }]);
        assert_eq!(ctrl.state(), RefreshState::None);

        // Unchanged size: nothing
        let change = ScrollChange::ContentSize {
            old: Size::new(390.0, 1400.0),
            new: Size::new(390.0, 1400.0),
        };
        let commands = bridge.route(&change, &snap(0.0, false), &mut ctrl);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_external_inset_updates_the_baseline() {
        let (mut bridge, mut ctrl) = footer_parts();
        let external = EdgeInsets::vertical(30.0, 10.0);
        let change = ScrollChange::Inset {
            old: EdgeInsets::ZERO,
            new: external,
        };

        bridge.route(&change, &snap(0.0, false), &mut ctrl);
        assert_eq!(ctrl.origin_insets(), external);
    }

    #[test]
    fn test_expected_inset_is_consumed_without_capture() {
        let (mut bridge, mut ctrl) = footer_parts();
        let own = EdgeInsets::vertical(0.0, 54.0);
        bridge.expect_inset(own);

        let change = ScrollChange::Inset {
            old: EdgeInsets::ZERO,
            new: own,
        };
        bridge.route(&change, &snap(0.0, false), &mut ctrl);
        assert_eq!(ctrl.origin_insets(), EdgeInsets::ZERO);

        // The same value arriving again is external now
        bridge.route(&change, &snap(0.0, false), &mut ctrl);
        assert_eq!(ctrl.origin_insets(), own);
    }

    #[test]
    fn test_inset_is_ignored_while_loading() {
        let (mut bridge, mut ctrl) = footer_parts();

        // Walk the footer into Loading: pull past threshold, release
        for (offset, dragging) in [(210.0, true), (260.0, true), (260.0, false)] {
            let change = ScrollChange::Offset {
                old: Point::ZERO,
                new: Point::new(0.0, offset),
            };
            bridge.route(&change, &snap(offset, dragging), &mut ctrl);
        }
        assert_eq!(ctrl.state(), RefreshState::Loading);

        let change = ScrollChange::Inset {
            old: EdgeInsets::ZERO,
            new: EdgeInsets::vertical(40.0, 0.0),
        };
        bridge.route(&change, &snap(200.0, false), &mut ctrl);
        assert_eq!(ctrl.origin_insets(), EdgeInsets::ZERO);
    }

    #[test]
    fn test_detached_bridge_delivers_nothing() {
        let (mut bridge, mut ctrl) = footer_parts();
        bridge.detach();
        bridge.detach();

        let change = ScrollChange::Offset {
            old: Point::ZERO,
            new: Point::new(0.0, 210.0),
        };
        let commands = bridge.route(&change, &snap(210.0, true), &mut ctrl);
        assert!(commands.is_empty());
        assert_eq!(ctrl.state(), RefreshState::None);

        // Re-attach restores delivery; attaching twice changes nothing
        bridge.attach();
        bridge.attach();
        bridge.route(&change, &snap(210.0, true), &mut ctrl);
        assert_eq!(ctrl.state(), RefreshState::Triggering);
    }
}
