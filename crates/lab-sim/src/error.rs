//! Error types for simulation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered during a fixed-grid simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Core(#[from] lab_core::LabError),
}

pub type SimResult<T> = Result<T, SimError>;
