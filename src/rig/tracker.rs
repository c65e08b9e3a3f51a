use log::{debug, warn};
use nalgebra::{Vector2, Vector3};

use crate::components::{Pose, RigInput, ToggleEdge};
use crate::debug::{DebugColor, DebugShape};
use crate::rig::{AimSource, RigConfig};
use crate::utils::errors::RigError;
use crate::utils::math::{damp, look_rotation};

const DEBUG_SPHERE_RADIUS: f64 = 10.0;
const DEBUG_RAY_LENGTH: f64 = 50.0;

/// Camera rig and aim tracker for one aircraft.
///
/// The host drives it with three calls per frame, in order:
/// [`FlightRig::simulate`] once per rendered frame,
/// [`FlightRig::fixed_simulate`] on each fixed-rate tick (only meaningful
/// when `use_fixed_follow` is set), and [`FlightRig::compose_pose`] after
/// simulation to place the camera.
///
/// The aircraft pose and first-person anchor are optional bindings; a
/// missing binding never faults, it degrades to the rig's own forward ray.
pub struct FlightRig {
    config: RigConfig,
    rig: Pose,
    aim: Option<AimSource>,
    aircraft: Option<Pose>,
    first_person_anchor: Option<Vector3<f64>>,
    first_person: bool,
    active_offset: Vector3<f64>,
    frozen_direction: Vector3<f64>,
    frozen: bool,
    warned_unbound: bool,
}

impl FlightRig {
    pub fn new(config: RigConfig) -> Result<Self, RigError> {
        config.validate()?;
        let active_offset = config.offset;
        Ok(Self {
            config,
            rig: Pose::default(),
            aim: Some(AimSource::default()),
            aircraft: None,
            first_person_anchor: None,
            first_person: false,
            active_offset,
            frozen_direction: Vector3::z(),
            frozen: false,
            warned_unbound: false,
        })
    }

    /// Latest aircraft pose from the flight model. Call every frame the
    /// aircraft exists; the rig falls back to its own forward ray without it.
    pub fn bind_aircraft(&mut self, pose: Pose) {
        self.aircraft = Some(pose);
    }

    pub fn clear_aircraft(&mut self) {
        self.aircraft = None;
    }

    /// World anchor the rig snaps to while in first-person view.
    pub fn bind_first_person_anchor(&mut self, anchor: Vector3<f64>) {
        self.first_person_anchor = Some(anchor);
    }

    /// Replace the aim source, or detach it with `None` to run on the
    /// forward-ray fallback.
    pub fn bind_aim(&mut self, aim: Option<AimSource>) {
        self.aim = aim;
    }

    /// Move the whole rig, aim origin included. Follow mode overwrites this
    /// on the next tick if an aircraft or anchor is bound.
    pub fn place(&mut self, position: Vector3<f64>) {
        self.rig.position = position;
        if let Some(aim) = &mut self.aim {
            aim.position = position;
        }
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn pose(&self) -> &Pose {
        &self.rig
    }

    pub fn aim(&self) -> Option<&AimSource> {
        self.aim.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_first_person(&self) -> bool {
        self.first_person
    }

    /// Per-frame tick: toggle handling, aim integration, and damped
    /// rotation towards the aircraft heading.
    pub fn simulate(&mut self, input: &RigInput, dt: f64) {
        if !self.warned_unbound {
            if self.aircraft.is_none() {
                warn!("no aircraft bound; boresight tracks the rig's own forward ray");
            }
            if self.aim.is_none() {
                warn!("no aim source bound; aim point tracks the rig's own forward ray");
            }
            self.warned_unbound = true;
        }

        if input.view_toggle {
            self.first_person = !self.first_person;
            self.active_offset = if self.first_person {
                Vector3::zeros()
            } else {
                self.config.offset
            };
            debug!(
                "view mode: {}",
                if self.first_person { "first person" } else { "third person" }
            );
        }

        if !self.config.use_fixed_follow {
            self.follow_position();
        }

        self.rotate_rig(input, dt);
    }

    /// Fixed-rate tick: position follow only, when configured for it.
    pub fn fixed_simulate(&mut self, _dt: f64) {
        if self.config.use_fixed_follow {
            self.follow_position();
        }
    }

    /// Final camera pose: the rig pose plus the active view offset applied
    /// in the camera's own rotated basis.
    pub fn compose_pose(&self) -> Pose {
        let mut camera = self.rig;
        camera.position += camera.forward() * self.active_offset.z;
        camera.position += camera.up() * self.active_offset.y;
        camera.position += camera.right() * self.active_offset.x;
        camera
    }

    /// Point along the aircraft's nose, projected out to `aim_distance`.
    /// Useful for a fixed-guns crosshair.
    pub fn boresight_point(&self) -> Vector3<f64> {
        match &self.aircraft {
            Some(aircraft) => {
                aircraft.position + aircraft.forward() * self.config.aim_distance
            }
            None => self.forward_ray(),
        }
    }

    /// Point the mouse is asking the aircraft to fly towards, projected out
    /// to `aim_distance`. Reads the frozen direction while free-look is held.
    pub fn aim_point(&self) -> Vector3<f64> {
        match &self.aim {
            Some(aim) => {
                let direction = if self.frozen {
                    self.frozen_direction
                } else {
                    aim.forward()
                };
                aim.position + direction * self.config.aim_distance
            }
            None => self.forward_ray(),
        }
    }

    /// Overlay shapes for a host gizmo pass. Empty unless `show_debug` is
    /// set: boresight and aim spheres plus the aim source axes.
    pub fn debug_shapes(&self) -> Vec<DebugShape> {
        if !self.config.show_debug {
            return Vec::new();
        }

        let mut shapes = Vec::new();
        if self.aircraft.is_some() {
            shapes.push(DebugShape::WireSphere {
                center: self.boresight_point(),
                radius: DEBUG_SPHERE_RADIUS,
                color: DebugColor::White,
            });
        }
        if let Some(aim) = &self.aim {
            shapes.push(DebugShape::WireSphere {
                center: self.aim_point(),
                radius: DEBUG_SPHERE_RADIUS,
                color: DebugColor::Red,
            });
            shapes.push(DebugShape::Ray {
                origin: aim.position,
                direction: aim.forward() * DEBUG_RAY_LENGTH,
                color: DebugColor::Blue,
            });
            shapes.push(DebugShape::Ray {
                origin: aim.position,
                direction: aim.up() * DEBUG_RAY_LENGTH,
                color: DebugColor::Green,
            });
            shapes.push(DebugShape::Ray {
                origin: aim.position,
                direction: aim.right() * DEBUG_RAY_LENGTH,
                color: DebugColor::Red,
            });
        }
        shapes
    }

    fn forward_ray(&self) -> Vector3<f64> {
        self.rig.position + self.rig.forward() * self.config.aim_distance
    }

    fn rotate_rig(&mut self, input: &RigInput, dt: f64) {
        if let Some(aim) = &mut self.aim {
            match input.free_look {
                ToggleEdge::Pressed => {
                    self.frozen = true;
                    self.frozen_direction = aim.forward();
                }
                ToggleEdge::Released => {
                    self.frozen = false;
                    // Resume the live aim from the frozen heading so the
                    // aim point does not snap on release.
                    aim.point_along(&self.frozen_direction);
                }
                ToggleEdge::None => {}
            }

            if input.mouse_delta != Vector2::zeros() {
                aim.rotate(input.mouse_delta, self.config.mouse_sensitivity);
            }
        }

        if let Some(aircraft) = &self.aircraft {
            // Face the aircraft heading; taking up from the aircraft makes
            // the chase camera match its roll as well.
            let target = look_rotation(&aircraft.forward(), &aircraft.up());
            self.rig.attitude = damp(
                &self.rig.attitude,
                &target,
                self.config.cam_smooth_speed,
                dt,
            );
        }
    }

    fn follow_position(&mut self) {
        let target = if self.first_person {
            self.first_person_anchor
                .or_else(|| self.aircraft.as_ref().map(|a| a.position))
        } else {
            self.aircraft.as_ref().map(|a| a.position)
        };
        if let Some(position) = target {
            self.rig.position = position;
            if let Some(aim) = &mut self.aim {
                aim.position = position;
            }
        }
    }
}
