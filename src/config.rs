//! Tunables for path shape and movement timing
//!
//! None of these are required by callers; `TrajectoryConfig::default()` is
//! what the convenience entry points use. A config can also be loaded from a
//! JSON document, where every missing field falls back to its default.

use crate::error::{TrajectoryError, TrajectoryResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mapping from elapsed-time fraction to path-progress fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VelocityProfile {
    /// Minimum-jerk polynomial `10s³ - 15s⁴ + 6s⁵`
    #[default]
    MinimumJerk,
    /// Half-cosine ease-in/ease-out
    Cosine,
    /// Piecewise cubic ease-in/ease-out
    Cubic,
    /// Constant speed; mainly useful for comparisons
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrajectoryConfig {
    /// Largest perpendicular control-point offset, as a fraction of distance
    pub curvature: f64,
    /// Smallest perpendicular control-point offset, as a fraction of distance
    pub min_curvature: f64,
    /// Probability that a gesture overshoots the target and corrects back
    pub overshoot_probability: f64,
    /// Gestures shorter than this (px) never overshoot
    pub overshoot_min_distance: f64,
    /// Overshoot distance range, as fractions of the gesture distance
    pub overshoot_extent: (f64, f64),
    /// Fitts's-law intercept in milliseconds
    pub base_duration_ms: f64,
    /// Fitts's-law slope in milliseconds per bit of difficulty
    pub duration_per_bit_ms: f64,
    /// Effective target width in pixels
    pub target_width: f64,
    /// Interval jitter spread contributed by one unit of frequency randomizer
    pub jitter_per_unit: f64,
    pub velocity_profile: VelocityProfile,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            curvature: 0.25,
            min_curvature: 0.03,
            overshoot_probability: 0.15,
            overshoot_min_distance: 150.0,
            overshoot_extent: (0.02, 0.07),
            base_duration_ms: 120.0,
            duration_per_bit_ms: 95.0,
            target_width: 12.0,
            jitter_per_unit: 0.15,
            velocity_profile: VelocityProfile::MinimumJerk,
        }
    }
}

impl TrajectoryConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json_str(json: &str) -> TrajectoryResult<Self> {
        let config: TrajectoryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> TrajectoryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!("Loaded trajectory config from {}", path.display());
        Ok(config)
    }

    /// Check that every tunable is finite and within its meaningful range
    pub fn validate(&self) -> TrajectoryResult<()> {
        let fields = [
            ("curvature", self.curvature),
            ("minCurvature", self.min_curvature),
            ("overshootProbability", self.overshoot_probability),
            ("overshootMinDistance", self.overshoot_min_distance),
            ("overshootExtent[0]", self.overshoot_extent.0),
            ("overshootExtent[1]", self.overshoot_extent.1),
            ("baseDurationMs", self.base_duration_ms),
            ("durationPerBitMs", self.duration_per_bit_ms),
            ("targetWidth", self.target_width),
            ("jitterPerUnit", self.jitter_per_unit),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TrajectoryError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.min_curvature > self.curvature {
            return Err(TrajectoryError::InvalidConfig(format!(
                "minCurvature ({}) exceeds curvature ({})",
                self.min_curvature, self.curvature
            )));
        }
        if self.overshoot_probability > 1.0 {
            return Err(TrajectoryError::InvalidConfig(format!(
                "overshootProbability must be at most 1, got {}",
                self.overshoot_probability
            )));
        }
        if self.overshoot_extent.0 > self.overshoot_extent.1 {
            return Err(TrajectoryError::InvalidConfig(format!(
                "overshootExtent is reversed: [{}, {}]",
                self.overshoot_extent.0, self.overshoot_extent.1
            )));
        }
        if self.target_width == 0.0 {
            return Err(TrajectoryError::InvalidConfig(
                "targetWidth must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(TrajectoryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            TrajectoryConfig::from_json_str(r#"{"curvature": 0.4, "velocityProfile": "cosine"}"#)
                .unwrap();
        assert_eq!(config.curvature, 0.4);
        assert_eq!(config.velocity_profile, VelocityProfile::Cosine);
        assert_eq!(config.base_duration_ms, TrajectoryConfig::default().base_duration_ms);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = TrajectoryConfig::from_json_str(r#"{"overshootProbability": 1.5}"#).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidConfig(_)));

        let err = TrajectoryConfig::from_json_str(r#"{"targetWidth": 0.0}"#).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidConfig(_)));

        let err =
            TrajectoryConfig::from_json_str(r#"{"curvature": 0.01, "minCurvature": 0.1}"#).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = TrajectoryConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TrajectoryError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"overshootProbability": 0.0, "jitterPerUnit": 0.3}}"#).unwrap();

        let config = TrajectoryConfig::load(file.path()).unwrap();
        assert_eq!(config.overshoot_probability, 0.0);
        assert_eq!(config.jitter_per_unit, 0.3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = TrajectoryConfig::load("/nonexistent/cursory-config.json").unwrap_err();
        assert!(matches!(err, TrajectoryError::Io(_)));
    }
}
