use serde::{Deserialize, Serialize};

use crate::utils::errors::RigError;

/// Tunables for control-surface and propeller animation. Angles are in
/// degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Smoothing window fed to the per-axis spring, scaled by delta-time.
    pub smooth_time: f64,
    /// Propeller spin rate, degrees per second.
    pub prop_speed: f64,
    /// Maximum aileron deflection.
    pub aileron_max: f64,
    /// Maximum elevator deflection.
    pub elevator_max: f64,
    /// Maximum rudder deflection.
    pub rudder_max: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            smooth_time: 0.5,
            prop_speed: 100.0,
            aileron_max: 20.0,
            elevator_max: 20.0,
            rudder_max: 20.0,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), RigError> {
        if !self.smooth_time.is_finite() || self.smooth_time <= 0.0 {
            return Err(RigError::InvalidConfig(
                "smooth_time must be positive".into(),
            ));
        }
        if !self.prop_speed.is_finite() {
            return Err(RigError::InvalidConfig("prop_speed must be finite".into()));
        }
        for (name, max) in [
            ("aileron_max", self.aileron_max),
            ("elevator_max", self.elevator_max),
            ("rudder_max", self.rudder_max),
        ] {
            if !max.is_finite() || max < 0.0 {
                return Err(RigError::InvalidConfig(format!(
                    "{} must be non-negative",
                    name
                )));
            }
        }
        Ok(())
    }
}
