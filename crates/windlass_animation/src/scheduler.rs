//! Tween scheduler
//!
//! Owns all active tweens and advances them once per frame. Starters keep
//! the returned id so an in-flight tween can be interrupted when a newer
//! adjustment replaces it.

use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TweenId;
}

/// The scheduler that ticks all active tweens
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, Tween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, tween: Tween) -> TweenId {
        self.tweens.insert(tween)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    pub fn remove(&mut self, id: TweenId) -> Option<Tween> {
        self.tweens.remove(id)
    }

    /// Advance all tweens; `dt` is seconds since the previous frame
    pub fn tick(&mut self, dt: f32) {
        for (_, tween) in self.tweens.iter_mut() {
            tween.step(dt);
        }
    }

    /// Drop tweens that have reached their end value
    pub fn prune_finished(&mut self) {
        let before = self.tweens.len();
        self.tweens.retain(|_, tween| !tween.is_finished());
        let pruned = before - self.tweens.len();
        if pruned > 0 {
            tracing::trace!(pruned, "finished tweens removed");
        }
    }

    /// Check if any tween is still running
    pub fn has_active(&self) -> bool {
        self.tweens.iter().any(|(_, tween)| !tween.is_finished())
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}
