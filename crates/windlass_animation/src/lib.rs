//! Windlass Animation System
//!
//! Duration-based tweens and deferred countdowns for scroll adjustments.
//!
//! # Features
//!
//! - **Tweens**: eased value interpolation over a fixed duration
//! - **Scheduler**: slotmap-keyed tween storage ticked once per frame
//! - **Delays**: one-shot countdowns for deferred state transitions

pub mod delay;
pub mod easing;
pub mod scheduler;
pub mod tween;

pub use delay::Delay;
pub use easing::Easing;
pub use scheduler::{TweenId, TweenScheduler};
pub use tween::Tween;
