use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A position and attitude pair in world space.
///
/// Conventions: +Z is forward, +Y is up, +X is right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl Pose {
    pub fn new(position: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self { position, attitude }
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }
}
