mod aim;
mod config;
mod tracker;

pub use aim::AimSource;
pub use config::RigConfig;
pub use tracker::FlightRig;
