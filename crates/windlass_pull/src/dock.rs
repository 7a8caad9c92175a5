//! Pull dock: a composition wrapper owning the container and its views
//!
//! One dock owns one scrollable container plus at most one header and one
//! footer pull view. It drains the container's change feed, routes every
//! change to the attached bridges, and applies the commands that come
//! back — mutations the container then reports like any other, which is
//! what lets the machine tell its own adjustments from the user's.

use windlass_core::PullError;

use crate::container::{ScrollContainer, ScrollSnapshot};
use crate::controller::Command;
use crate::state::{PullKind, RefreshState};
use crate::view::PullView;

/// Owns a scroll container and its optional header/footer pull views
pub struct PullDock<C: ScrollContainer> {
    container: C,
    header: Option<PullView>,
    footer: Option<PullView>,
}

impl<C: ScrollContainer> PullDock<C> {
    pub fn new(container: C) -> Self {
        Self {
            container,
            header: None,
            footer: None,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the container. Call [`pump`](Self::pump) after
    /// direct mutations so the published changes get delivered.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn header(&self) -> Option<&PullView> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&PullView> {
        self.footer.as_ref()
    }

    pub fn state(&self, slot: PullKind) -> Option<RefreshState> {
        self.slot(slot).map(|view| view.state())
    }

    /// Attach a header pull view, replacing and detaching any previous one
    ///
    /// # Panics
    ///
    /// Panics if `view` was built as a footer; use
    /// [`try_set_header`](Self::try_set_header) to handle the mismatch.
    pub fn set_header(&mut self, view: PullView) {
        if let Err(err) = self.try_set_header(view) {
            panic!("{err}");
        }
    }

    pub fn try_set_header(&mut self, view: PullView) -> Result<(), PullError> {
        self.try_set(PullKind::Header, view)
    }

    /// Attach a footer pull view, replacing and detaching any previous one
    ///
    /// # Panics
    ///
    /// Panics if `view` was built as a header; use
    /// [`try_set_footer`](Self::try_set_footer) to handle the mismatch.
    pub fn set_footer(&mut self, view: PullView) {
        if let Err(err) = self.try_set_footer(view) {
            panic!("{err}");
        }
    }

    pub fn try_set_footer(&mut self, view: PullView) -> Result<(), PullError> {
        self.try_set(PullKind::Footer, view)
    }

    pub fn remove_header(&mut self) -> Option<PullView> {
        self.remove(PullKind::Header)
    }

    pub fn remove_footer(&mut self) -> Option<PullView> {
        self.remove(PullKind::Footer)
    }

    /// Show or hide a pull view: swaps the reservation on the owned inset
    /// edge and toggles feed delivery. Hiding twice, or calling on an
    /// empty slot, is a no-op.
    pub fn set_visible(&mut self, slot: PullKind, visible: bool) {
        {
            let Some(view) = self.slot_mut(slot).as_mut() else {
                tracing::trace!(kind = slot.label(), "set_visible on empty slot ignored");
                return;
            };
            if view.visible == visible {
                return;
            }
            view.visible = visible;
            if visible {
                view.bridge.attach();
            } else {
                view.bridge.detach();
            }
        }
        self.reserve(slot, visible);
        self.pump();
    }

    /// Finish a loading cycle started by the refresh callback
    pub fn end_refreshing(&mut self, slot: PullKind) {
        let snap = ScrollSnapshot::capture(&self.container);
        let commands = {
            let Some(view) = self.slot_mut(slot).as_mut() else {
                tracing::trace!(kind = slot.label(), "end_refreshing on empty slot ignored");
                return;
            };
            view.controller.end_refreshing(&snap)
        };
        self.apply(slot, &commands);
        self.pump();
    }

    /// Deliver all pending container changes to the attached pull views
    ///
    /// Loops until the feed is quiescent: commands applied along the way
    /// publish further changes, which are delivered in turn.
    pub fn pump(&mut self) {
        while let Some(change) = self.container.feed_mut().pop() {
            for slot in [PullKind::Header, PullKind::Footer] {
                let snap = ScrollSnapshot::capture(&self.container);
                let commands = {
                    let Some(view) = self.slot_mut(slot).as_mut() else {
                        continue;
                    };
                    view.bridge.route(&change, &snap, &mut view.controller)
                };
                if !commands.is_empty() {
                    self.apply(slot, &commands);
                }
            }
        }
    }

    /// Advance one frame: settle countdowns plus an idempotent evaluation
    /// sweep. The sweep is what notices a drag release or an interrupted
    /// recovery that produced no offset traffic of its own.
    pub fn tick(&mut self, dt: f32) {
        for slot in [PullKind::Header, PullKind::Footer] {
            let snap = ScrollSnapshot::capture(&self.container);
            let commands = {
                let Some(view) = self.slot_mut(slot).as_mut() else {
                    continue;
                };
                view.controller.tick(dt);
                if !view.bridge.is_attached() {
                    continue;
                }
                view.controller.evaluate(&snap)
            };
            if !commands.is_empty() {
                self.apply(slot, &commands);
            }
        }
        self.pump();
    }

    fn try_set(&mut self, slot: PullKind, view: PullView) -> Result<(), PullError> {
        if view.kind() != slot {
            return Err(PullError::KindMismatch {
                expected: slot.label(),
                found: view.kind().label(),
            });
        }
        self.remove(slot);
        // The baseline must exclude this view's own reservation, so it is
        // captured before reserving
        let baseline = self.container.content_inset();
        let mut view = view;
        view.controller.set_origin_insets(baseline);
        view.bridge.attach();
        view.visible = true;
        *self.slot_mut(slot) = Some(view);
        self.reserve(slot, true);
        self.place(slot);
        self.pump();
        Ok(())
    }

    fn remove(&mut self, slot: PullKind) -> Option<PullView> {
        let visible = {
            let view = self.slot_mut(slot).as_mut()?;
            view.bridge.detach();
            view.visible
        };
        if visible {
            self.reserve(slot, false);
        }
        let view = self.slot_mut(slot).take();
        tracing::debug!(kind = slot.label(), "pull view detached");
        self.pump();
        view
    }

    /// Swap the owned inset edge between reserved and baseline. Headers
    /// keep no standing reservation — they float above the content and
    /// claim space only while loading — so their edge is re-normalized to
    /// the baseline either way.
    fn reserve(&mut self, slot: PullKind, reserved: bool) {
        let (container, slot_ref) = self.parts(slot);
        let Some(view) = slot_ref.as_mut() else {
            return;
        };
        let baseline = view.controller.origin_insets();
        let config = view.controller.config();
        let mut inset = container.content_inset();
        match slot {
            PullKind::Header => inset.top = baseline.top,
            PullKind::Footer => {
                inset.bottom = if reserved {
                    baseline.bottom + config.height
                } else {
                    baseline.bottom
                };
            }
        }
        if view.bridge.is_attached() {
            view.bridge.expect_inset(inset);
        }
        container.set_content_inset(inset, config.visibility_change_duration);
    }

    fn place(&mut self, slot: PullKind) {
        let content_height = self.container.content_size().height;
        let Some(view) = self.slot_mut(slot).as_mut() else {
            return;
        };
        view.frame_y = if slot.is_header() {
            -view.controller.config().height
        } else {
            content_height
        };
    }

    fn apply(&mut self, slot: PullKind, commands: &[Command]) {
        for command in commands {
            match *command {
                Command::SetOffsetY { y, duration } => {
                    let mut offset = self.container.content_offset();
                    offset.y = y;
                    self.container.set_content_offset(offset, duration);
                }
                Command::SetInsetEdge { value, duration } => {
                    // Fresh read-modify-write of the whole inset so the
                    // other edge's concurrent adjustments survive
                    let mut inset = self.container.content_inset();
                    match slot {
                        PullKind::Header => inset.top = value,
                        PullKind::Footer => inset.bottom = value,
                    }
                    if let Some(view) = self.slot_mut(slot).as_mut() {
                        view.bridge.expect_inset(inset);
                    }
                    self.container.set_content_inset(inset, duration);
                }
                Command::PlaceView { y } => {
                    if let Some(view) = self.slot_mut(slot).as_mut() {
                        view.frame_y = y;
                    }
                }
            }
        }
    }

    fn slot(&self, slot: PullKind) -> Option<&PullView> {
        match slot {
            PullKind::Header => self.header.as_ref(),
            PullKind::Footer => self.footer.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: PullKind) -> &mut Option<PullView> {
        match slot {
            PullKind::Header => &mut self.header,
            PullKind::Footer => &mut self.footer,
        }
    }

    fn parts(&mut self, slot: PullKind) -> (&mut C, &mut Option<PullView>) {
        match slot {
            PullKind::Header => (&mut self.container, &mut self.header),
            PullKind::Footer => (&mut self.container, &mut self.footer),
        }
    }
}
