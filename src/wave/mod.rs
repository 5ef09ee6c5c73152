//! Wave path generation core
//!
//! Everything in here is pure and deterministic:
//! - No clock: the phase step is an input
//! - No platform or rendering dependencies
//! - Fresh point and command vectors per call, nothing carried between frames

pub mod params;
pub mod path;
pub mod sampler;

pub use params::WaveParameters;
pub use path::{PathCommand, PathDescription, PathParseError, build_path};
pub use sampler::sample;

/// A position in container-local coordinates
pub type Point = glam::DVec2;

/// Sample the wave and build its closed outline in one call
pub fn wave_path(width: f64, height: f64, step: f64, params: &WaveParameters) -> PathDescription {
    let points = sample(width, step, params);
    build_path(&points, width, height)
}
