pub mod input;
pub mod spatial;

pub use input::{RigInput, ToggleEdge};
pub use spatial::Pose;
