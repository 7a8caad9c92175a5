//! Pull controller: the refresh state machine and its geometry math
//!
//! Interprets container geometry into trigger conditions, walks the
//! refresh state machine, and emits offset/inset commands for the dock to
//! apply. Sign conventions are the crux: a header triggers below its
//! appear offset and a footer above it, and the two derive their appear
//! offsets from different baseline references (top inset vs. bottom
//! content overflow), because a footer's appearance point depends on
//! whether content already overflows the viewport.
//!
//! The controller never touches the container itself. Evaluation returns
//! commands instead, which keeps it safe to re-run from the middle of a
//! notification burst: its own adjustments come back through the feed
//! like everyone else's and fall out as no-ops.

use smallvec::SmallVec;

use windlass_animation::Delay;
use windlass_core::events::refresh_events;
use windlass_core::{EdgeInsets, StateTransitions};

use crate::container::ScrollSnapshot;
use crate::state::{PullKind, RefreshState};
use crate::view::{PullConfig, PullIndicator};

/// Adjustment the controller asks the dock to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Animate the vertical content offset to `y` over `duration` seconds
    SetOffsetY { y: f32, duration: f32 },
    /// Write `value` to the owned inset edge (top for headers, bottom for
    /// footers), read-modify-write over the freshest full inset
    SetInsetEdge { value: f32, duration: f32 },
    /// Re-place the pull view's frame within the content
    PlaceView { y: f32 },
}

/// Commands produced by one evaluation; bursts rarely exceed two
pub type Commands = SmallVec<[Command; 2]>;

/// Refresh callback type, invoked exactly once per loading entry
pub type RefreshCallback = Box<dyn FnMut(PullKind) + Send>;

/// The state machine and geometry math behind one pull view
pub struct PullController {
    kind: PullKind,
    config: PullConfig,
    state: RefreshState,
    /// Container inset excluding this view's own reservation; the
    /// baseline all appear-offset math is relative to
    origin_insets: EdgeInsets,
    indicator: Box<dyn PullIndicator>,
    refresh_callback: Option<RefreshCallback>,
    last_percent: f32,
    /// Pending CanFinish→None countdown; cancelled by any state change
    settle: Option<Delay>,
    /// Latch so one CanFinish episode issues at most one recover animation
    recovering: bool,
}

impl PullController {
    pub(crate) fn new(kind: PullKind, indicator: Box<dyn PullIndicator>) -> Self {
        let config = indicator.config();
        Self {
            kind,
            config,
            state: RefreshState::None,
            origin_insets: EdgeInsets::ZERO,
            indicator,
            refresh_callback: None,
            last_percent: 0.0,
            settle: None,
            recovering: false,
        }
    }

    pub fn kind(&self) -> PullKind {
        self.kind
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn config(&self) -> PullConfig {
        self.config
    }

    pub(crate) fn origin_insets(&self) -> EdgeInsets {
        self.origin_insets
    }

    pub(crate) fn set_origin_insets(&mut self, insets: EdgeInsets) {
        tracing::trace!(kind = self.kind.label(), ?insets, "baseline inset captured");
        self.origin_insets = insets;
    }

    pub(crate) fn on_refresh<F>(&mut self, callback: F)
    where
        F: FnMut(PullKind) + Send + 'static,
    {
        self.refresh_callback = Some(Box::new(callback));
    }

    /// Run the state machine against a geometry snapshot
    ///
    /// Safe to invoke repeatedly: identical geometry produces no further
    /// side effects after the first run. At most one transition fires per
    /// run, so a pull that is already past the full threshold still
    /// passes through Triggering before reaching Triggered.
    pub fn evaluate(&mut self, snap: &ScrollSnapshot) -> Commands {
        let mut commands = Commands::new();
        let appear = self.appear_offset(snap);
        let distance = self.trigger_distance(snap.offset_y, appear);
        let triggering = distance > 0.0;
        let triggered = triggering && distance >= self.config.height;
        let loading_ready =
            triggering && distance >= self.config.height * self.config.required_trigger_percent;

        use refresh_events::*;
        let event = match self.state {
            RefreshState::None if triggering && snap.dragging => Some(PULL_STARTED),
            RefreshState::Triggering if triggered => Some(THRESHOLD_CROSSED),
            RefreshState::Triggering if !triggering => Some(PULL_ABANDONED),
            RefreshState::Triggered if !loading_ready => Some(PULL_RETREATED),
            RefreshState::Triggered if !snap.dragging => Some(RELEASED),
            _ => None,
        };

        match event.and_then(|event| self.state.on_event(event)) {
            Some(RefreshState::Loading) => {
                self.set_state(RefreshState::Loading, distance);
                let target = if self.kind.is_header() {
                    appear - self.config.height
                } else {
                    appear
                };
                self.push_offset_commands(&mut commands, target, self.config.recover_loading_duration);
                if let Some(callback) = self.refresh_callback.as_mut() {
                    callback(self.kind);
                }
            }
            Some(next) => self.set_state(next, distance),
            None if self.state == RefreshState::Triggering => {
                // No transition, but the pull distance moved
                self.set_state(RefreshState::Triggering, distance);
            }
            None => {}
        }

        if self.state == RefreshState::CanFinish && !snap.dragging {
            if snap.offset_y == appear {
                // Exact equality works because commands write final model
                // values; animation is presentation-only
                if self.settle.is_none() {
                    self.settle = Some(Delay::new(self.config.recover_none_duration));
                    tracing::trace!(kind = self.kind.label(), "settle scheduled");
                }
            } else if !self.recovering {
                // end_refreshing arrived mid-drag; recover now that the
                // drag is over
                self.recovering = true;
                self.push_offset_commands(&mut commands, appear, self.config.recover_none_duration);
            }
        }

        commands
    }

    /// Force the CanFinish state and re-run the machine once
    ///
    /// When the user is not dragging this immediately starts the recover
    /// animation; otherwise recovery waits until the drag ends.
    pub fn end_refreshing(&mut self, snap: &ScrollSnapshot) -> Commands {
        let next = self
            .state
            .on_event(refresh_events::FINISHED)
            .unwrap_or(RefreshState::CanFinish);
        self.set_state(next, 0.0);
        self.evaluate(snap)
    }

    /// Advance the settle countdown; fires the deferred CanFinish→None
    /// transition when it elapses
    pub fn tick(&mut self, dt: f32) {
        let Some(delay) = self.settle.as_mut() else {
            return;
        };
        if delay.tick(dt) {
            self.settle = None;
            // The transition table drops a SETTLED that went stale while
            // the state moved on
            if let Some(next) = self.state.on_event(refresh_events::SETTLED) {
                self.set_state(next, 0.0);
            }
        }
    }

    /// The scroll offset at which this view is flush with the viewport edge
    pub(crate) fn appear_offset(&self, snap: &ScrollSnapshot) -> f32 {
        if self.kind.is_header() {
            -self.origin_insets.top
        } else {
            let absolute = snap.content_height - snap.bounds_height
                + self.origin_insets.bottom
                + self.origin_insets.top;
            if absolute > 0.0 {
                absolute - self.origin_insets.top
            } else {
                -self.origin_insets.top
            }
        }
    }

    fn trigger_distance(&self, offset_y: f32, appear: f32) -> f32 {
        if self.kind.is_header() {
            appear - offset_y
        } else {
            offset_y - appear
        }
    }

    fn push_offset_commands(&self, commands: &mut Commands, y: f32, duration: f32) {
        if self.kind.is_header() {
            // The header holds content below itself by pinning the top
            // inset to the negated target offset while loading/recovering
            commands.push(Command::SetInsetEdge {
                value: -y,
                duration,
            });
        }
        commands.push(Command::SetOffsetY { y, duration });
    }

    fn set_state(&mut self, next: RefreshState, distance: f32) {
        let percent = if next == RefreshState::Triggering {
            (distance / self.config.height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if next == self.state && percent == self.last_percent {
            return;
        }
        if next != self.state {
            tracing::debug!(
                kind = self.kind.label(),
                from = ?self.state,
                to = ?next,
                "refresh state"
            );
            // A pending settle and recover latch belong to the state that
            // produced them
            self.settle = None;
            self.recovering = false;
        }
        self.state = next;
        self.last_percent = percent;
        self.indicator.on_state_change(next, percent);
    }
}
