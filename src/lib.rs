mod animation;
mod components;
mod config;
mod debug;
mod rig;
mod utils;

pub use animation::{AnimationConfig, ControlTargets, SmoothChannel, SurfaceAngles, SurfaceAnimator};
pub use components::{Pose, RigInput, ToggleEdge};
pub use config::FlightConfig;
pub use debug::{DebugColor, DebugShape};
pub use rig::{AimSource, FlightRig, RigConfig};
pub use utils::{damp, deg_to_rad, look_rotation, rad_to_deg, smooth_damp, RigError};
