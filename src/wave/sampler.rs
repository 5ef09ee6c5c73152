//! Phase-driven point sampling across the container width

use super::params::WaveParameters;
use super::Point;
use crate::consts::SAMPLE_SCALE;

/// Sample the wave surface at `max(points, 1) + 1` evenly spaced columns.
///
/// Column `i` sits at `i / points * width`, using the raw `points` as the
/// divisor even when the sample count was floored. Each height applies
/// `sin(seed / scale)` twice, once to modulate the amplitude and once as the
/// offset, which bends the curve away from a plain sine.
///
/// The remainder is taken on reals so `points == 0` produces NaN coordinates
/// rather than a panic. Callers are expected to pass `points >= 1`.
pub fn sample(width: f64, step: f64, params: &WaveParameters) -> Vec<Point> {
    let count = params.segment_count();
    let divisor = params.points as f64;

    (0..=count)
        .map(|i| {
            let i = i as f64;
            let x = (i / divisor) * width;
            let seed = (step + (i + (i % divisor))) * params.speed * SAMPLE_SCALE;
            let wave = (seed / SAMPLE_SCALE).sin();
            let inner_height = wave * params.amplitude;
            let y = wave * inner_height + params.height;
            Point::new(x, y)
        })
        .collect()
}
