use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Invalid control input: {0}")]
    InvalidControl(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}
