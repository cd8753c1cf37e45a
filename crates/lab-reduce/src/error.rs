//! Error types for pendulum-period reduction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered while loading or reducing a sample table.
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("Failed to read sample file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Sample table has no header row")]
    MissingHeader,

    #[error("Missing column '{name}' in header")]
    MissingColumn { name: &'static str },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: cannot parse '{value}' in column '{column}'")]
    Parse {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: attempt count must be positive")]
    ZeroAttempts { line: usize },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Core(#[from] lab_core::LabError),
}

pub type ReduceResult<T> = Result<T, ReduceError>;
