use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::rig::RigConfig;
use crate::utils::errors::RigError;

/// Top-level configuration: the camera rig and the surface animation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightConfig {
    pub rig: RigConfig,
    pub animation: AnimationConfig,
}

impl FlightConfig {
    pub fn load(path: &str) -> Result<Self, RigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), RigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), RigError> {
        self.rig.validate()?;
        self.animation.validate()
    }
}
