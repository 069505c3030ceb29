use crate::core::models::topology::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("Histogram requires at least one finite sample")]
    EmptyHistogram,

    #[error("Histogram requires a non-zero bin count")]
    ZeroBins,

    #[error("x and y arrays differ in length ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Fit requires at least {parameters} samples, got {samples}")]
    Underdetermined { samples: usize, parameters: usize },

    #[error("Fit did not converge after {iterations} iterations")]
    Convergence { iterations: usize },
}
