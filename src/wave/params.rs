//! Wave shape tuning inputs

/// Shape and animation parameters consumed by the sampler.
///
/// The core trusts these values: `points` should be at least 1 and the reals
/// finite. Validation lives in [`crate::settings::WaveConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Scales the vertical excursion of the wave
    pub amplitude: f64,
    /// Vertical baseline offset (not the container height)
    pub height: f64,
    /// Phase multiplier applied to the step
    pub speed: f64,
    /// Sampling density; the sampler emits `max(points, 1) + 1` points
    pub points: i32,
}

impl WaveParameters {
    pub fn new(amplitude: f64, height: f64, speed: f64, points: i32) -> Self {
        Self {
            amplitude,
            height,
            speed,
            points,
        }
    }

    /// Number of segments actually sampled (floored at 1)
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.max(1) as usize
    }
}
