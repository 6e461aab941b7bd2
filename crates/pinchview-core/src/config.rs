//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower scale clamp.
pub const DEFAULT_MIN_SCALE: f64 = 0.5;

/// Default upper scale clamp.
pub const DEFAULT_MAX_SCALE: f64 = 30.0;

/// Error types for configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A scale bound is NaN or infinite.
    #[error("Scale bound must be finite, got {0}")]
    NonFiniteBound(f64),

    /// A scale bound is zero or negative.
    #[error("Scale bound must be positive, got {0}")]
    NonPositiveBound(f64),

    /// The lower bound exceeds the upper bound.
    #[error("min_scale ({min}) is greater than max_scale ({max})")]
    InvertedBounds { min: f64, max: f64 },
}

/// Options recognized by the engine.
///
/// Deserializes from both snake_case and the camelCase spelling a JS host
/// passes (`{ minScale: 0.5, maxScale: 30 }`). Missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lower scale clamp
    #[serde(alias = "minScale")]
    pub min_scale: f64,
    /// Upper scale clamp
    #[serde(alias = "maxScale")]
    pub max_scale: f64,
    /// Enable one-finger pan and two-finger drift pan
    pub pan: bool,
    /// Enable two-finger rotation
    pub rotate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            pan: true,
            rotate: true,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given scale bounds and everything else enabled.
    pub fn with_bounds(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale,
            max_scale,
            ..Self::default()
        }
    }

    /// Check that the scale bounds describe a usable, non-empty range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for bound in [self.min_scale, self.max_scale] {
            if !bound.is_finite() {
                return Err(ConfigError::NonFiniteBound(bound));
            }
            if bound <= 0.0 {
                return Err(ConfigError::NonPositiveBound(bound));
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }

    /// Saturate `scale` into `[min_scale, max_scale]`.
    #[inline]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}
