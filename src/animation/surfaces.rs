use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::utils::errors::RigError;
use crate::utils::math::smooth_damp;

/// One critically-damped smoothing axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothChannel {
    value: f64,
    velocity: f64,
}

impl SmoothChannel {
    /// Step towards `target`, returning the smoothed value. The window the
    /// spring sees is `dt * smooth_time`, so the effective stiffness scales
    /// with the frame rate.
    pub fn update(&mut self, target: f64, smooth_time: f64, dt: f64) -> f64 {
        self.value = smooth_damp(self.value, target, &mut self.velocity, dt * smooth_time, dt);
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Raw stick targets, each in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlTargets {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl ControlTargets {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn validate(&self) -> Result<(), RigError> {
        for (name, value) in [
            ("roll", self.roll),
            ("pitch", self.pitch),
            ("yaw", self.yaw),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(RigError::InvalidControl(format!(
                    "{} out of bounds",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Deflection angles for one frame, in degrees. Recomputed every update;
/// the host applies them to however many surface meshes it has.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceAngles {
    pub aileron_left: f64,
    pub aileron_right: f64,
    pub elevator: f64,
    pub rudder: f64,
    /// Accumulated propeller angle in [0, 360).
    pub propeller: f64,
}

/// Smooths stick inputs into control-surface deflections.
///
/// Three independent axes; ailerons are mirror-signed, elevator and rudder
/// carry one signed angle each.
pub struct SurfaceAnimator {
    config: AnimationConfig,
    roll: SmoothChannel,
    pitch: SmoothChannel,
    yaw: SmoothChannel,
    propeller_angle: f64,
}

impl SurfaceAnimator {
    pub fn new(config: AnimationConfig) -> Result<Self, RigError> {
        config.validate()?;
        Ok(Self {
            config,
            roll: SmoothChannel::default(),
            pitch: SmoothChannel::default(),
            yaw: SmoothChannel::default(),
            propeller_angle: 0.0,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn update(&mut self, targets: &ControlTargets, dt: f64) -> SurfaceAngles {
        self.propeller_angle =
            (self.propeller_angle + self.config.prop_speed * dt).rem_euclid(360.0);

        let smooth_time = self.config.smooth_time;
        let roll = self.roll.update(targets.roll, smooth_time, dt);
        let pitch = self.pitch.update(targets.pitch, smooth_time, dt);
        let yaw = self.yaw.update(targets.yaw, smooth_time, dt);

        SurfaceAngles {
            aileron_left: -roll * self.config.aileron_max,
            aileron_right: roll * self.config.aileron_max,
            elevator: -pitch * self.config.elevator_max,
            rudder: -yaw * self.config.rudder_max,
            propeller: self.propeller_angle,
        }
    }
}
