use std::time::Duration;

/// Caps how often a simulation steps, independent of the display rate.
///
/// Long gaps (tab in background, slow frame) yield a single step rather
/// than a burst of catch-up steps.
#[derive(Clone, Debug)]
pub struct FrameLimiter {
    interval: Duration,
    pending: Duration,
}

impl FrameLimiter {
    pub fn new(fps: f32) -> Self {
        let interval = if fps.is_finite() && fps > 0.0 {
            Duration::from_secs_f32(1.0 / fps)
        } else {
            Duration::ZERO
        };
        Self {
            interval,
            pending: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Accumulate `dt`; returns whether a step is due.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.pending += dt;
        if self.pending < self.interval {
            return false;
        }
        self.pending = if self.pending >= self.interval * 2 {
            Duration::ZERO
        } else {
            self.pending - self.interval
        };
        true
    }

    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}
