//! Wall-clock frame timing

use std::time::{Duration, Instant};

/// Measures the real time between consecutive frames.
///
/// Deltas are clamped to `max_dt` so a stall (debugger, window drag) does not
/// fling entities across the field in a single step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    pub fn starting_at(start: Instant, max_dt: f32) -> Self {
        Self { last: start, max_dt }
    }

    /// Seconds since the previous call (or construction), clamped
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        clamp_dt(elapsed, self.max_dt)
    }
}

fn clamp_dt(elapsed: Duration, max_dt: f32) -> f32 {
    elapsed.as_secs_f32().min(max_dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = clock.tick_at(start + Duration::from_millis(48));
        assert!((dt - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_stalls() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        assert_eq!(clock.tick_at(start + Duration::from_secs(3)), 0.1);
    }

    #[test]
    fn test_never_negative() {
        let start = Instant::now() + Duration::from_millis(10);
        let mut clock = FrameClock::starting_at(start, 0.1);
        assert_eq!(clock.tick_at(start - Duration::from_millis(5)), 0.0);
    }
}
