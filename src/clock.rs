use std::time::Duration;

use iced::time::Instant;

/// Timing of a single animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Position within the current animation period, in `[0, 1)`.
    pub progress: f32,
    /// Time since the previous frame in milliseconds.
    pub frame_millis: f64,
}

/// Turns redraw instants into per-frame durations.
///
/// Frame lengths are reported as-is: a long gap between two ticks becomes one
/// long frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    period: Duration,
    started: Option<Instant>,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started: None,
            last: None,
        }
    }

    /// Clock whose period is one revolution at `speed` revolutions per second.
    pub fn for_speed(speed: f64) -> Self {
        let period = if speed.is_finite() && speed > 0.0 {
            Duration::try_from_secs_f64(1.0 / speed).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        };
        Self::new(period)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Forget previous ticks; the next tick reports a zero-length frame.
    pub fn reset(&mut self) {
        self.started = None;
        self.last = None;
    }

    /// Record a frame at `now`.
    pub fn tick(&mut self, now: Instant) -> FrameTiming {
        let started = *self.started.get_or_insert(now);
        let frame = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);

        FrameTiming {
            progress: self.progress_at(now.saturating_duration_since(started)),
            frame_millis: frame.as_secs_f64() * 1000.0,
        }
    }

    fn progress_at(&self, running: Duration) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        let period = self.period.as_secs_f64();
        (running.as_secs_f64().rem_euclid(period) / period) as f32
    }
}
