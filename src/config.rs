//! Physics tuning
//!
//! Loaded from an optional JSON file by the native driver. Fields missing
//! from the file keep their default values. Particle count and box geometry
//! are fixed in [`crate::consts`] and are not part of the tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward world-space acceleration (pixels/s²)
    pub gravity: f32,
    /// Speed fraction kept after wall and particle bounces (0-1)
    pub restitution: f32,
    /// Box rotation speed (radians/s)
    pub rotation_speed: f32,
    /// Angle added per flip (radians)
    pub rotation_angle: f32,
    /// Particle speed below which it counts as settled
    pub settle_speed: f32,
    /// Seconds of stillness before a flip starts
    pub settle_time: f32,
    /// Fraction of overlap removed by positional correction each step
    pub correction_percent: f32,
    /// Overlap ignored by positional correction (pixels)
    pub correction_slop: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: BOUNCE_DAMPENING,
            rotation_speed: ROTATION_SPEED,
            rotation_angle: ROTATION_ANGLE,
            settle_speed: SETTLED_VELOCITY_THRESHOLD,
            settle_time: SETTLED_CHECK_TIME,
            correction_percent: CORRECTION_PERCENT,
            correction_slop: CORRECTION_SLOP,
        }
    }
}

impl PhysicsTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid("gravity must be finite".to_string()));
        }
        if !self.restitution.is_finite() || !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Invalid(
                "restitution must be within 0..=1".to_string(),
            ));
        }
        if !self.rotation_speed.is_finite() || self.rotation_speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "rotation_speed must be finite and > 0".to_string(),
            ));
        }
        if !self.rotation_angle.is_finite() || self.rotation_angle <= 0.0 {
            return Err(ConfigError::Invalid(
                "rotation_angle must be finite and > 0".to_string(),
            ));
        }
        if !self.settle_speed.is_finite() || self.settle_speed < 0.0 {
            return Err(ConfigError::Invalid(
                "settle_speed must be finite and >= 0".to_string(),
            ));
        }
        if !self.settle_time.is_finite() || self.settle_time < 0.0 {
            return Err(ConfigError::Invalid(
                "settle_time must be finite and >= 0".to_string(),
            ));
        }
        if !self.correction_percent.is_finite() || !(0.0..=1.0).contains(&self.correction_percent)
        {
            return Err(ConfigError::Invalid(
                "correction_percent must be within 0..=1".to_string(),
            ));
        }
        if !self.correction_slop.is_finite() || self.correction_slop < 0.0 {
            return Err(ConfigError::Invalid(
                "correction_slop must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded physics tuning from {}", path.display());
        Ok(tuning)
    }
}
