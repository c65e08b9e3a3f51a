use nalgebra::{UnitQuaternion, Vector2, Vector3};

use crate::utils::math::deg_to_rad;

// Keep the aim shy of straight up/down so yaw stays well defined.
const PITCH_LIMIT: f64 = 1.54;

/// The live mouse-aim source: a world position plus a yaw/pitch heading.
///
/// Mouse motion is integrated here; the tracker reads `forward()` for the
/// live aim direction and resets the heading when free-look is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSource {
    pub position: Vector3<f64>,
    yaw: f64,
    pitch: f64,
}

impl Default for AimSource {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl AimSource {
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude() * Vector3::z()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude() * Vector3::y()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude() * Vector3::x()
    }

    /// Integrate one tick of mouse motion, `sensitivity` degrees per pixel.
    pub fn rotate(&mut self, delta: Vector2<f64>, sensitivity: f64) {
        self.yaw += deg_to_rad(delta.x * sensitivity);
        self.pitch = (self.pitch - deg_to_rad(delta.y * sensitivity))
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Re-aim along `direction`, keeping the world up vector as reference.
    /// Zero directions are ignored.
    pub fn point_along(&mut self, direction: &Vector3<f64>) {
        if direction.norm_squared() < 1.0e-12 {
            return;
        }
        let d = direction.normalize();
        self.yaw = d.x.atan2(d.z);
        self.pitch = (-d.y).clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_aims_forward() {
        let aim = AimSource::default();
        assert_relative_eq!(aim.forward().z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_yaws_right() {
        let mut aim = AimSource::default();
        // 30 pixels at 3 deg/pixel = 90 degrees to the right.
        aim.rotate(Vector2::new(30.0, 0.0), 3.0);
        assert_relative_eq!(aim.forward().x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(aim.forward().z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate_positive_y_pitches_up() {
        let mut aim = AimSource::default();
        aim.rotate(Vector2::new(0.0, 10.0), 3.0);
        assert!(aim.forward().y > 0.0);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut aim = AimSource::default();
        aim.rotate(Vector2::new(0.0, 1.0e6), 3.0);
        assert!(aim.forward().y < 1.0);
        assert!(aim.forward().norm() > 0.99);
    }

    #[test]
    fn test_point_along_round_trips() {
        let mut aim = AimSource::default();
        aim.rotate(Vector2::new(17.0, -6.0), 3.0);
        let captured = aim.forward();

        aim.rotate(Vector2::new(-40.0, 25.0), 3.0);
        aim.point_along(&captured);

        let restored = aim.forward();
        assert_relative_eq!(restored.x, captured.x, epsilon = 1e-9);
        assert_relative_eq!(restored.y, captured.y, epsilon = 1e-9);
        assert_relative_eq!(restored.z, captured.z, epsilon = 1e-9);
    }

    #[test]
    fn test_point_along_ignores_zero() {
        let mut aim = AimSource::default();
        aim.rotate(Vector2::new(5.0, 5.0), 3.0);
        let before = aim.forward();
        aim.point_along(&Vector3::zeros());
        assert_eq!(aim.forward(), before);
    }
}
