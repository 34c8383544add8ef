//! Monotonic simulation time accumulator.

/// Accumulated simulation time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationClock {
    time_s: f64,
}

impl SimulationClock {
    /// Create a clock starting at `time_s` seconds.
    pub fn new(time_s: f64) -> Self {
        Self { time_s }
    }

    /// Advance the clock by `dt_s` seconds.
    pub fn advance(&mut self, dt_s: f64) {
        self.time_s += dt_s;
    }

    /// Move the clock to an absolute time.
    pub fn reset(&mut self, time_s: f64) {
        self.time_s = time_s;
    }

    /// Current simulation time in seconds.
    pub fn time_s(&self) -> f64 {
        self.time_s
    }
}
