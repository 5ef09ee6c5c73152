//! Per-frame driver glue
//!
//! Ticks the virtual clock, then runs the pure core with the current
//! container size. Holds no geometry between frames.

use crate::clock::WaveClock;
use crate::settings::{ConfigError, WaveConfig};
use crate::wave::{PathDescription, Point, build_path, sample};

/// A configured wave plus its animation clock
#[derive(Debug, Clone)]
pub struct WaveAnimator {
    config: WaveConfig,
    clock: WaveClock,
    frames: u64,
}

impl WaveAnimator {
    /// Create an animator from validated settings
    pub fn new(config: WaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Wave animator: amplitude={}, height={}, speed={}, points={}",
            config.amplitude,
            config.height,
            config.speed,
            config.points
        );
        Ok(Self {
            clock: WaveClock::with_paused(config.paused),
            config,
            frames: 0,
        })
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Swap in new settings without restarting the animation
    pub fn set_config(&mut self, config: WaveConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.clock.set_paused(config.paused);
        self.config = config;
        Ok(())
    }

    pub fn clock(&self) -> &WaveClock {
        &self.clock
    }

    pub fn pause(&mut self) {
        self.config.paused = true;
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.config.paused = false;
        self.clock.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Frames produced so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Advance to host time `now_ms` and build the outline for a
    /// `width` x `height` container.
    pub fn frame(&mut self, now_ms: f64, width: f64, height: f64) -> PathDescription {
        self.clock.tick(now_ms);
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::trace!(
                "Wave frame {}: elapsed={:.0}ms step={:.3}",
                self.frames,
                self.clock.elapsed_ms(),
                self.clock.step()
            );
        }
        build_path(&self.points(width), width, height)
    }

    /// Sampled surface at the current step, without advancing time
    pub fn points(&self, width: f64) -> Vec<Point> {
        sample(width, self.clock.step(), &self.config.parameters())
    }
}
