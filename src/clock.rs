//! Virtual animation time
//!
//! Elapsed time only advances while running. Each tick records the host
//! timestamp even when paused, so resuming never replays the paused span.

use crate::phase_from_elapsed;

/// Monotonic virtual clock owned by the driver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveClock {
    elapsed_ms: f64,
    last_update_ms: Option<f64>,
    paused: bool,
}

impl WaveClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in the given pause state
    pub fn with_paused(paused: bool) -> Self {
        Self {
            paused,
            ..Self::default()
        }
    }

    /// Advance to host time `now_ms`. The first tick only records the timestamp.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(last) = self.last_update_ms {
            if !self.paused {
                // Host clocks can jump backwards; never rewind the wave
                self.elapsed_ms += (now_ms - last).max(0.0);
            }
        }
        self.last_update_ms = Some(now_ms);
    }

    pub fn pause(&mut self) {
        self.set_paused(true);
    }

    pub fn resume(&mut self) {
        self.set_paused(false);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::debug!("Wave clock {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Unpaused milliseconds accumulated so far
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Phase step for the sampler
    pub fn step(&self) -> f64 {
        phase_from_elapsed(self.elapsed_ms)
    }

    /// Back to zero elapsed time, keeping the pause state
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.last_update_ms = None;
    }
}
