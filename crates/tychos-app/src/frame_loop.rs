//! Fixed-timestep host loop.
//!
//! The live clock advances at a fixed rate from an accumulator, and once per
//! frame the frame callback runs. Cooperative work such as an ephemerides
//! batch belongs in the frame callback so that it is bounded per frame.

use std::time::Instant;

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time fed to the accumulator. Slower frames are clamped and
/// the simulation falls behind wall-clock time instead of catching up.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator state driven either by wall-clock time ([`tick`](Self::tick))
/// or by explicit frame times ([`advance`](Self::advance)).
pub struct FrameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Measure the time since the previous frame and [`advance`](Self::advance)
    /// by it.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64), frame_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time, update_fn, frame_fn);
    }

    /// Run one frame of `frame_time` seconds.
    ///
    /// - `update_fn(fixed_dt, total_sim_time)` is called zero or more times at
    ///   the fixed rate.
    /// - `frame_fn(alpha)` is called exactly once with the leftover fraction of
    ///   a step in `[0.0, 1.0)`.
    pub fn advance(
        &mut self,
        frame_time: f64,
        mut update_fn: impl FnMut(f64, f64),
        mut frame_fn: impl FnMut(f64),
    ) {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        frame_fn(self.alpha());
        self.frame_count += 1;
    }

    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total fixed-step time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
