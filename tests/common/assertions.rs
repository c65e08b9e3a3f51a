use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};

/// Assert that two world-space points are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(
        actual.x,
        expected.x,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.y,
        expected.y,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.z,
        expected.z,
        epsilon = epsilon,
        max_relative = epsilon
    );
}

/// Assert that two attitudes are approximately equal
#[track_caller]
pub fn assert_attitude_eq(
    actual: &UnitQuaternion<f64>,
    expected: &UnitQuaternion<f64>,
    epsilon: f64,
) {
    // Compare using angle difference
    let angle = actual.angle_to(expected);
    assert!(
        angle < epsilon,
        "Attitude difference {} exceeds epsilon {}",
        angle,
        epsilon
    );
}

/// Assert that two world-space directions are approximately equal
#[track_caller]
pub fn assert_direction_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    let angle = actual.normalize().dot(&expected.normalize()).clamp(-1.0, 1.0).acos();
    assert!(
        angle < epsilon,
        "Direction difference {} exceeds epsilon {}",
        angle,
        epsilon
    );
}
