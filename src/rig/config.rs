use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::errors::RigError;

/// Tunables for the camera rig and aim tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    /// How quickly the rig rotates to face the aircraft, 1/s.
    pub cam_smooth_speed: f64,
    /// Degrees of aim rotation per pixel of mouse motion.
    pub mouse_sensitivity: f64,
    /// How far the boresight and aim points sit from the aircraft, meters.
    pub aim_distance: f64,
    /// Third-person camera offset, applied in the camera's local basis
    /// (x right, y up, z forward). First person zeroes it.
    pub offset: Vector3<f64>,
    /// Copy the follow position on the fixed-rate tick instead of every
    /// rendered frame.
    pub use_fixed_follow: bool,
    /// Emit debug overlay shapes.
    pub show_debug: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            cam_smooth_speed: 5.0,
            mouse_sensitivity: 3.0,
            aim_distance: 500.0,
            offset: Vector3::zeros(),
            use_fixed_follow: true,
            show_debug: false,
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<(), RigError> {
        if !self.cam_smooth_speed.is_finite() || self.cam_smooth_speed <= 0.0 {
            return Err(RigError::InvalidConfig(
                "cam_smooth_speed must be positive".into(),
            ));
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err(RigError::InvalidConfig(
                "mouse_sensitivity must be finite".into(),
            ));
        }
        if !self.aim_distance.is_finite() || self.aim_distance <= 0.0 {
            return Err(RigError::InvalidConfig(
                "aim_distance must be positive".into(),
            ));
        }
        if !self.offset.iter().all(|c| c.is_finite()) {
            return Err(RigError::InvalidConfig("offset must be finite".into()));
        }
        Ok(())
    }
}
