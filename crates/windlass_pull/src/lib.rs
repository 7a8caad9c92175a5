//! Windlass Pull Views
//!
//! Pull-to-refresh headers and load-more footers for any scrollable
//! container that can report offset, content-size, and inset changes.
//!
//! A [`PullDock`] owns the container plus at most one header and one
//! footer [`PullView`]. Geometry changes flow through each view's
//! observer bridge into its pull controller, which walks the refresh
//! state machine (`None → Triggering → Triggered → Loading → CanFinish →
//! None`) and answers with offset/inset adjustments the dock applies back
//! to the container.
//!
//! # Example
//!
//! ```rust,ignore
//! use windlass_pull::prelude::*;
//!
//! struct Spinner;
//!
//! impl PullIndicator for Spinner {
//!     fn on_state_change(&mut self, state: RefreshState, trigger_percent: f32) {
//!         // rotate the arrow / spin the wheel
//!     }
//! }
//!
//! let pane = ScrollPane::new(Size::new(390.0, 800.0), Size::new(390.0, 2000.0));
//! let mut dock = PullDock::new(pane);
//! dock.set_header(PullView::header(Spinner).on_refresh(|_| {
//!     // kick off the reload; call dock.end_refreshing(PullKind::Header)
//!     // when it completes
//! }));
//! ```

pub mod bridge;
pub mod container;
pub mod controller;
pub mod dock;
pub mod feed;
pub mod pane;
pub mod state;
pub mod view;

pub use bridge::ObserverBridge;
pub use container::{ScrollContainer, ScrollSnapshot};
pub use controller::{Command, Commands, PullController};
pub use dock::PullDock;
pub use feed::{ScrollChange, ScrollFeed};
pub use pane::ScrollPane;
pub use state::{PullKind, RefreshState};
pub use view::{PullConfig, PullIndicator, PullView};

/// Everything a typical integration needs
pub mod prelude {
    pub use crate::container::ScrollContainer;
    pub use crate::dock::PullDock;
    pub use crate::pane::ScrollPane;
    pub use crate::state::{PullKind, RefreshState};
    pub use crate::view::{PullConfig, PullIndicator, PullView};
    pub use windlass_core::{EdgeInsets, Point, Size};
}
