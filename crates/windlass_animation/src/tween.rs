//! Duration-based value tweens

use crate::easing::Easing;

/// A tween animating a value from start to end over a fixed duration
///
/// This is the "animate property P to value V over duration D" primitive:
/// the owner steps it each frame and samples the interpolated value for
/// presentation. A zero (or negative) duration completes immediately.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Advance the tween; `dt` is seconds since the previous frame
    pub fn step(&mut self, dt: f32) {
        if self.duration > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Sample the current value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * self.easing.apply(t)
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_end_exactly() {
        let mut tween = Tween::new(0.0, 100.0, 0.25);

        // Simulate at 60fps until past the duration
        for _ in 0..30 {
            tween.step(1.0 / 60.0);
        }

        assert!(tween.is_finished());
        assert_eq!(tween.value(), 100.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tween = Tween::new(10.0, 20.0, 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 20.0);
    }

    #[test]
    fn test_midway_value_is_between_endpoints() {
        let mut tween = Tween::new(0.0, 100.0, 1.0).with_easing(Easing::Linear);
        tween.step(0.5);
        assert!((tween.value() - 50.0).abs() < 1e-4);
    }
}
