use input::TimerDuration;
use std::time;

/// Source of frame time.
///
/// Each call to [`delta`](trait.Clock.html#tymethod.delta) consumes the time
/// elapsed since the previous call.
pub trait Clock {
    /// Seconds since the previous call, never negative.
    fn delta(&mut self) -> TimerDuration;
}

/// Timer can be used to find the time difference between the moment of timer creation and the
/// moment of calling [`elapsed`](struct.Timer.html#method.elapsed).
///
/// As a [`Clock`](trait.Clock.html) it restarts on every read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    start: time::Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

impl Timer {
    /// Create new timer based on current system time.
    pub fn new() -> Self {
        Self { start: time::Instant::now() }
    }

    /// Reset time of creation to current time.
    pub fn reset(&mut self) {
        self.start = time::Instant::now();
    }

    /// Get period of time since timer creation in seconds.
    pub fn elapsed(&self) -> TimerDuration {
        let dt = self.start.elapsed();
        dt.as_secs() as f32 + 1e-9 * dt.subsec_nanos() as f32
    }
}

impl Clock for Timer {
    fn delta(&mut self) -> TimerDuration {
        let dt = self.elapsed();
        self.reset();
        dt
    }
}

/// Clock advancing by the same step on every read.
///
/// Handy for tests and deterministic replays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock {
    step: TimerDuration,
}

impl FixedClock {
    /// Create a clock reporting `step` seconds per frame. Negative steps read as zero.
    pub fn new(step: TimerDuration) -> Self {
        FixedClock { step: step.max(0.0) }
    }

    /// Change the step reported by subsequent reads.
    pub fn set_step(
        &mut self,
        step: TimerDuration,
    ) {
        self.step = step.max(0.0);
    }
}

impl Clock for FixedClock {
    fn delta(&mut self) -> TimerDuration {
        self.step
    }
}
