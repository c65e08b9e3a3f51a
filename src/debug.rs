use nalgebra::Vector3;

/// Gizmo palette for the overlay, matched by the host to its own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    White,
    Red,
    Green,
    Blue,
}

/// One overlay primitive. Pure data; drawing is the host's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugShape {
    WireSphere {
        center: Vector3<f64>,
        radius: f64,
        color: DebugColor,
    },
    Ray {
        origin: Vector3<f64>,
        direction: Vector3<f64>,
        color: DebugColor,
    },
}
