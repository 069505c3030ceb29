use batscan::analysis::error::AnalysisError;
use batscan::core::forcefield::params::ParamLoadError;
use batscan::core::io::topology::TopologyFileError;
use batscan::core::io::xyz::XyzError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Trajectory(#[from] XyzError),

    #[error(transparent)]
    Topology(#[from] TopologyFileError),

    #[error(transparent)]
    Parameters(#[from] ParamLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
