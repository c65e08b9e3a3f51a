mod config;
mod surfaces;

pub use config::AnimationConfig;
pub use surfaces::{ControlTargets, SmoothChannel, SurfaceAngles, SurfaceAnimator};
