mod common;

use approx::assert_relative_eq;
use common::init_logging;
use mouseflight::{AnimationConfig, ControlTargets, SurfaceAngles, SurfaceAnimator};
use pretty_assertions::assert_eq;

const DT: f64 = 1.0 / 60.0;

fn animator() -> SurfaceAnimator {
    SurfaceAnimator::new(AnimationConfig::default()).expect("valid config")
}

#[test]
fn test_initial_state_is_neutral() {
    init_logging();
    let mut animator = animator();
    let angles = animator.update(&ControlTargets::default(), 0.0);
    assert_eq!(
        angles,
        SurfaceAngles {
            aileron_left: 0.0,
            aileron_right: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            propeller: 0.0,
        }
    );
}

#[test]
fn test_mirrored_roll_signs() {
    let mut animator = animator();
    let angles = animator.update(&ControlTargets::new(0.6, 0.0, 0.0), DT);
    assert!(angles.aileron_right > 0.0);
    assert_eq!(angles.aileron_left, -angles.aileron_right);
}

#[test]
fn test_elevator_and_rudder_are_single_signed_outputs() {
    let mut animator = animator();
    let angles = animator.update(&ControlTargets::new(0.0, 1.0, 1.0), DT);
    // Stick back deflects the elevator trailing edge up; pedal right swings
    // the rudder the opposite sign, both as one angle per surface pair.
    assert!(angles.elevator < 0.0);
    assert!(angles.rudder < 0.0);
    assert!(angles.aileron_left == 0.0 && angles.aileron_right == 0.0);
}

#[test]
fn test_full_roll_asymptote_without_overshoot() {
    let mut animator = animator();
    let held = ControlTargets::new(1.0, 0.0, 0.0);
    let mut angles = SurfaceAngles::default();
    for _ in 0..600 {
        angles = animator.update(&held, DT);
        assert!(angles.aileron_right <= 20.0 + 1e-9, "overshoot");
        assert!(angles.aileron_left >= -20.0 - 1e-9, "overshoot");
    }
    assert_relative_eq!(angles.aileron_left, -20.0, epsilon = 1e-3);
    assert_relative_eq!(angles.aileron_right, 20.0, epsilon = 1e-3);
}

#[test]
fn test_smoothed_value_stays_in_band_for_bounded_targets() {
    let mut animator = animator();
    // Alternate hard stick reversals; deflections must stay inside the
    // configured limits.
    for i in 0..400 {
        let sign = if (i / 20) % 2 == 0 { 1.0 } else { -1.0 };
        let angles = animator.update(&ControlTargets::new(sign, -sign, sign), DT);
        assert!(angles.aileron_right.abs() <= 20.0 + 1e-9);
        assert!(angles.elevator.abs() <= 20.0 + 1e-9);
        assert!(angles.rudder.abs() <= 20.0 + 1e-9);
    }
}

#[test]
fn test_smoothing_lags_the_target() {
    let mut animator = animator();
    let angles = animator.update(&ControlTargets::new(1.0, 0.0, 0.0), DT);
    // One tick cannot reach full deflection.
    assert!(angles.aileron_right > 0.0);
    assert!(angles.aileron_right < 20.0);
}

#[test]
fn test_propeller_advances_at_constant_rate() {
    let mut animator = animator();
    let idle = ControlTargets::default();
    let first = animator.update(&idle, DT);
    let second = animator.update(&idle, DT);
    let step = 100.0 * DT;
    assert_relative_eq!(first.propeller, step, epsilon = 1e-9);
    assert_relative_eq!(second.propeller, 2.0 * step, epsilon = 1e-9);
}

#[test]
fn test_channels_are_independent() {
    let mut animator = animator();
    for _ in 0..200 {
        animator.update(&ControlTargets::new(1.0, 0.0, -1.0), DT);
    }
    let angles = animator.update(&ControlTargets::new(1.0, 0.0, -1.0), DT);
    assert_relative_eq!(angles.aileron_right, 20.0, epsilon = 1e-3);
    assert_relative_eq!(angles.elevator, 0.0, epsilon = 1e-9);
    assert_relative_eq!(angles.rudder, 20.0, epsilon = 1e-3);
}
