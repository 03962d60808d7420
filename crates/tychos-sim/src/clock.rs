//! Run/pause state and speed of the live simulation clock.

use tychos_time::S_DAY;

/// Advances simulation time while running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    pub running: bool,
    /// Simulated `pos` units per real second.
    pub speed: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            running: false,
            speed: S_DAY,
        }
    }
}

impl SimClock {
    pub fn new(speed: f64) -> Self {
        Self {
            running: false,
            speed,
        }
    }

    /// `pos` after `dt_seconds` of real time. Unchanged while paused.
    pub fn advance(&self, pos: f64, dt_seconds: f64) -> f64 {
        if self.running {
            pos + self.speed * dt_seconds
        } else {
            pos
        }
    }
}
