//! Error taxonomy for the analysis pipeline.
//!
//! Every failure is fatal to the current invocation: the pipeline has no
//! partial-success or retry semantics, so callers get one error carrying
//! enough context (stage, variable or axis name, dimensions) to diagnose it.

use thiserror::Error;

/// Result type for all pipeline operations.
pub type Result<T> = std::result::Result<T, PcaError>;

/// Errors raised by the PCA pipeline.
#[derive(Debug, Error)]
pub enum PcaError {
    /// The requested analysis cannot be satisfied by the data, e.g. more
    /// components than variables, or fewer than two observations.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A variable or axis carries no variance, so a normalization the
    /// pipeline depends on is undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Dimensions disagree, either at dataset construction or between
    /// pipeline stages.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The symmetric eigensolver failed.
    #[error("eigendecomposition failed: {0}")]
    Eigensolver(#[from] ndarray_linalg::error::LinalgError),
}
