//! Windlass Core
//!
//! Foundational primitives for the Windlass pull-to-refresh system:
//!
//! - **Geometry**: points, sizes, and edge insets in container units
//! - **Refresh Events**: typed event identifiers for the pull state machine
//! - **State Machine Seam**: the `StateTransitions` trait state enums implement
//! - **Errors**: the attach-time error taxonomy

pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use error::PullError;
pub use events::EventType;
pub use fsm::StateTransitions;
pub use geometry::{EdgeInsets, Point, Size};
