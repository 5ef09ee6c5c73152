//! Wave configuration
//!
//! Driver-side settings with defaults for anything the host leaves out.
//! The core trusts its parameters, so range checks happen here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_AMPLITUDE, DEFAULT_HEIGHT, DEFAULT_POINTS, DEFAULT_SPEED};
use crate::wave::WaveParameters;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("points must be at least 1, got {0}")]
    PointsOutOfRange(i32),

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("invalid wave config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wave settings as supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Vertical excursion of the wave
    pub amplitude: f64,
    /// Baseline offset from the top of the container
    pub height: f64,
    /// Phase speed multiplier
    pub speed: f64,
    /// Number of sampled segments across the width
    pub points: i32,
    /// Start with the animation frozen
    pub paused: bool,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            height: DEFAULT_HEIGHT,
            speed: DEFAULT_SPEED,
            points: DEFAULT_POINTS,
            paused: false,
        }
    }
}

impl WaveConfig {
    /// Parse and validate a JSON object; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the sampler cannot turn into finite coordinates
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points < 1 {
            return Err(ConfigError::PointsOutOfRange(self.points));
        }
        let reals = [
            ("amplitude", self.amplitude),
            ("height", self.height),
            ("speed", self.speed),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        Ok(())
    }

    /// Shape parameters handed to the core
    pub fn parameters(&self) -> WaveParameters {
        WaveParameters::new(self.amplitude, self.height, self.speed, self.points)
    }
}

impl From<WaveParameters> for WaveConfig {
    fn from(params: WaveParameters) -> Self {
        Self {
            amplitude: params.amplitude,
            height: params.height,
            speed: params.speed,
            points: params.points,
            paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WaveConfig::default();
        assert_eq!(config.points, 20);
        assert_eq!(config.amplitude, 20.0);
        assert_eq!(config.height, 20.0);
        assert_eq!(config.speed, 0.15);
        assert!(!config.paused);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = WaveConfig::from_json(r#"{"amplitude": 35, "points": 3}"#).unwrap();
        assert_eq!(config.amplitude, 35.0);
        assert_eq!(config.points, 3);
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_from_json_rejects_zero_points() {
        let err = WaveConfig::from_json(r#"{"points": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::PointsOutOfRange(0)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = WaveConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate_non_finite() {
        let config = WaveConfig {
            speed: f64::NAN,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { field: "speed" }));
        assert_eq!(err.to_string(), "speed must be a finite number");
    }

    #[test]
    fn test_json_round_trip() {
        let config = WaveConfig {
            amplitude: 12.5,
            paused: true,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(WaveConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_parameters() {
        let params = WaveConfig::default().parameters();
        assert_eq!(params, WaveParameters::new(20.0, 20.0, 0.15, 20));
        assert_eq!(WaveConfig::from(params).parameters(), params);
    }
}
