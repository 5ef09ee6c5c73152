//! Wavify - Animated organic wave shapes as SVG paths
//!
//! Core modules:
//! - `wave`: Pure path generation (sampling, reflected-anchor cubic outline)
//! - `clock`: Driver-owned virtual time with pause/resume
//! - `animator`: Per-frame glue from config + clock to path data
//! - `settings`: Validated wave configuration
//! - `platform`: Browser mounting and `requestAnimationFrame` loop

pub mod animator;
pub mod clock;
pub mod platform;
pub mod settings;
pub mod wave;

pub use animator::WaveAnimator;
pub use clock::WaveClock;
pub use settings::{ConfigError, WaveConfig};
pub use wave::{PathCommand, PathDescription, Point, WaveParameters, build_path, sample};

/// Wave configuration constants
pub mod consts {
    /// Fixed scale applied to the sampling seed before taking the sine
    pub const SAMPLE_SCALE: f64 = 100.0;
    /// Milliseconds per phase unit of π
    pub const PHASE_SCALE_MS: f64 = 1000.0;

    /// Driver defaults
    pub const DEFAULT_POINTS: i32 = 20;
    pub const DEFAULT_AMPLITUDE: f64 = 20.0;
    pub const DEFAULT_HEIGHT: f64 = 20.0;
    pub const DEFAULT_SPEED: f64 = 0.15;
}

/// Convert virtual elapsed milliseconds to the sampler's phase step
#[inline]
pub fn phase_from_elapsed(elapsed_ms: f64) -> f64 {
    (elapsed_ms * std::f64::consts::PI) / consts::PHASE_SCALE_MS
}
