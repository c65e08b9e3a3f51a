use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

const DEGENERATE_EPS: f64 = 1.0e-12;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Frame-rate independent rotational damping towards `target`.
///
/// The interpolation fraction is `1 - exp(-lambda * dt)`, so one step of
/// `dt` lands on the same orientation as two steps of `dt / 2`. `dt = 0`
/// leaves `current` unchanged; large `dt` converges on `target`.
pub fn damp(
    current: &UnitQuaternion<f64>,
    target: &UnitQuaternion<f64>,
    lambda: f64,
    dt: f64,
) -> UnitQuaternion<f64> {
    let factor = 1.0 - (-lambda * dt).exp();
    // Antipodal pairs have no unique geodesic; resolve towards the target.
    current
        .try_slerp(target, factor, DEGENERATE_EPS)
        .unwrap_or(*target)
}

/// Critically-damped spring step towards `target`.
///
/// `velocity` carries the derivative estimate between calls. The value
/// approaches the target without overshooting it; `smooth_time` is the
/// approximate time to close most of the gap and is floored at a small
/// epsilon. `dt = 0` leaves value and velocity untouched.
pub fn smooth_damp(
    current: f64,
    target: f64,
    velocity: &mut f64,
    smooth_time: f64,
    dt: f64,
) -> f64 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1.0e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Clamp at the target if the spring crossed it this step.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// Rotation whose local +Z axis points along `forward`, using `up` to fix
/// the roll. Degenerate inputs (zero vectors, forward parallel to up) fall
/// back to the identity.
pub fn look_rotation(forward: &Vector3<f64>, up: &Vector3<f64>) -> UnitQuaternion<f64> {
    if forward.norm_squared() < DEGENERATE_EPS || forward.cross(up).norm_squared() < DEGENERATE_EPS
    {
        return UnitQuaternion::identity();
    }
    UnitQuaternion::face_towards(forward, up)
}
