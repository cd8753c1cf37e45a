use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Reduction failed: {0}")]
    Reduce(#[from] lab_reduce::ReduceError),

    #[error("Simulation failed: {0}")]
    Sim(#[from] lab_sim::SimError),

    #[error("Failed to write output file: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
