//! Reference scrollable container
//!
//! An in-memory container for tests, demos, and headless hosts. Model
//! values change immediately and publish one feed change per write; a
//! nonzero duration additionally drives a presentation tween that
//! renderers can sample. After a drag release the pane eases overscrolled
//! content back inside its bounds, publishing offset changes as it goes —
//! the traffic a platform scroll view's bounce produces.

use windlass_animation::{Tween, TweenId, TweenScheduler};
use windlass_core::{EdgeInsets, Point, Size};

use crate::container::ScrollContainer;
use crate::feed::ScrollFeed;

/// Exponential approach rate of the post-release bounce, per second
const BOUNCE_RATE: f32 = 6.0;
/// Below this distance the bounce snaps exactly onto its target
const BOUNCE_EPSILON: f32 = 0.5;

/// A concrete in-memory [`ScrollContainer`]
pub struct ScrollPane {
    bounds: Size,
    content_size: Size,
    offset: Point,
    inset: EdgeInsets,
    dragging: bool,
    bouncing: bool,
    feed: ScrollFeed,
    tweens: TweenScheduler,
    offset_y_tween: Option<TweenId>,
    inset_top_tween: Option<TweenId>,
    inset_bottom_tween: Option<TweenId>,
}

impl ScrollPane {
    pub fn new(bounds: Size, content_size: Size) -> Self {
        Self {
            bounds,
            content_size,
            offset: Point::ZERO,
            inset: EdgeInsets::ZERO,
            dragging: false,
            bouncing: false,
            feed: ScrollFeed::new(),
            tweens: TweenScheduler::new(),
            offset_y_tween: None,
            inset_top_tween: None,
            inset_bottom_tween: None,
        }
    }

    pub fn with_inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    /// Begin a user drag at the current offset
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.bouncing = false;
    }

    /// Move the content to `y` while dragging
    pub fn drag_to(&mut self, y: f32) {
        let old = self.offset;
        self.offset.y = y;
        self.feed.push_offset(old, self.offset);
    }

    /// End the drag; overscrolled content starts easing back to bounds
    pub fn end_drag(&mut self) {
        self.dragging = false;
        if self.offset.y != self.rest_target() {
            self.bouncing = true;
        }
    }

    /// Programmatic scroll, the platform `setContentOffset` equivalent
    pub fn scroll_to(&mut self, y: f32, duration: f32) {
        let mut offset = self.offset;
        offset.y = y;
        self.set_content_offset(offset, duration);
    }

    /// Replace the content size, e.g. after appending rows
    pub fn set_content_size(&mut self, size: Size) {
        let old = self.content_size;
        self.content_size = size;
        self.feed.push_content_size(old, size);
    }

    /// Advance presentation tweens and the post-release bounce
    pub fn tick(&mut self, dt: f32) {
        self.tweens.tick(dt);
        self.tweens.prune_finished();

        if !self.bouncing || self.dragging {
            return;
        }
        let target = self.rest_target();
        let gap = target - self.offset.y;
        let old = self.offset;
        if gap.abs() <= BOUNCE_EPSILON {
            self.offset.y = target;
            self.bouncing = false;
        } else {
            self.offset.y += gap * (1.0 - (-dt * BOUNCE_RATE).exp());
        }
        self.feed.push_offset(old, self.offset);
    }

    pub fn is_bouncing(&self) -> bool {
        self.bouncing
    }

    /// Presentation-layer offset for renderers; equals the model offset
    /// once no adjustment is animating
    pub fn presented_offset_y(&self) -> f32 {
        self.offset_y_tween
            .and_then(|id| self.tweens.get(id))
            .map(|tween| tween.value())
            .unwrap_or(self.offset.y)
    }

    /// Presentation-layer inset for renderers
    pub fn presented_inset(&self) -> EdgeInsets {
        let mut inset = self.inset;
        if let Some(tween) = self.inset_top_tween.and_then(|id| self.tweens.get(id)) {
            inset.top = tween.value();
        }
        if let Some(tween) = self.inset_bottom_tween.and_then(|id| self.tweens.get(id)) {
            inset.bottom = tween.value();
        }
        inset
    }

    /// Where the content would rest given the current insets
    fn rest_target(&self) -> f32 {
        let min = -self.inset.top;
        let max = (self.content_size.height + self.inset.bottom - self.bounds.height).max(min);
        self.offset.y.clamp(min, max)
    }

    fn retarget(
        tweens: &mut TweenScheduler,
        slot: &mut Option<TweenId>,
        from: f32,
        to: f32,
        duration: f32,
    ) {
        if let Some(id) = slot.take() {
            tweens.remove(id);
        }
        if duration > 0.0 {
            *slot = Some(tweens.add(Tween::new(from, to, duration)));
        }
    }
}

impl ScrollContainer for ScrollPane {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point, duration: f32) {
        // An explicit write takes over from any in-flight bounce
        self.bouncing = false;
        let presented = self.presented_offset_y();
        let old = self.offset;
        self.offset = offset;
        Self::retarget(
            &mut self.tweens,
            &mut self.offset_y_tween,
            presented,
            offset.y,
            duration,
        );
        self.feed.push_offset(old, offset);
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn set_content_inset(&mut self, inset: EdgeInsets, duration: f32) {
        let presented = self.presented_inset();
        let old = self.inset;
        self.inset = inset;
        if inset.top != old.top {
            Self::retarget(
                &mut self.tweens,
                &mut self.inset_top_tween,
                presented.top,
                inset.top,
                duration,
            );
        }
        if inset.bottom != old.bottom {
            Self::retarget(
                &mut self.tweens,
                &mut self.inset_bottom_tween,
                presented.bottom,
                inset.bottom,
                duration,
            );
        }
        // Published even when the value is unchanged, the way key-value
        // observation reports every write
        self.feed.push_inset(old, inset);
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn feed_mut(&mut self) -> &mut ScrollFeed {
        &mut self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ScrollChange;

    fn pane() -> ScrollPane {
        ScrollPane::new(Size::new(390.0, 800.0), Size::new(390.0, 2000.0))
    }

    #[test]
    fn test_model_value_changes_immediately() {
        let mut pane = pane();
        pane.scroll_to(-54.0, 0.25);

        assert_eq!(pane.content_offset().y, -54.0);
        // Presentation lags behind over the duration
        assert_eq!(pane.presented_offset_y(), 0.0);

        for _ in 0..30 {
            pane.tick(1.0 / 60.0);
        }
        assert_eq!(pane.presented_offset_y(), -54.0);
    }

    #[test]
    fn test_every_write_publishes_one_change() {
        let mut pane = pane();
        pane.begin_drag();
        pane.drag_to(-10.0);
        pane.drag_to(-10.0);
        pane.set_content_inset(EdgeInsets::ZERO, 0.0);

        let feed = pane.feed_mut();
        assert_eq!(feed.len(), 3);
        assert!(matches!(
            feed.pop(),
            Some(ScrollChange::Offset { old, new }) if old.y == 0.0 && new.y == -10.0
        ));
        // The unchanged writes are still reported
        assert!(matches!(feed.pop(), Some(ScrollChange::Offset { .. })));
        assert!(matches!(feed.pop(), Some(ScrollChange::Inset { .. })));
    }

    #[test]
    fn test_release_bounces_back_to_exact_rest() {
        let mut pane = pane();
        pane.begin_drag();
        pane.drag_to(-60.0);
        pane.end_drag();
        assert!(pane.is_bouncing());

        for _ in 0..120 {
            pane.tick(1.0 / 60.0);
        }
        assert!(!pane.is_bouncing());
        assert_eq!(pane.content_offset().y, 0.0);
    }

    #[test]
    fn test_bounce_respects_insets() {
        let mut pane = pane().with_inset(EdgeInsets::vertical(54.0, 0.0));
        pane.begin_drag();
        pane.drag_to(-80.0);
        pane.end_drag();

        for _ in 0..120 {
            pane.tick(1.0 / 60.0);
        }
        assert_eq!(pane.content_offset().y, -54.0);
    }

    #[test]
    fn test_explicit_write_cancels_bounce() {
        let mut pane = pane();
        pane.begin_drag();
        pane.drag_to(-60.0);
        pane.end_drag();
        assert!(pane.is_bouncing());

        pane.scroll_to(-54.0, 0.0);
        assert!(!pane.is_bouncing());
        assert_eq!(pane.content_offset().y, -54.0);
    }

    #[test]
    fn test_release_inside_bounds_does_not_bounce() {
        let mut pane = pane();
        pane.begin_drag();
        pane.drag_to(300.0);
        pane.end_drag();
        assert!(!pane.is_bouncing());
    }
}
