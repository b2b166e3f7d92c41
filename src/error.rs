use thiserror::Error;

/// Top-level error type for conic computations.
#[derive(Debug, Error)]
pub enum ConicError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error("unrecognized conic type: {0}")]
    UnrecognizedConicType(String),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A conic parameter violates the precondition of its conic type.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be nonzero")]
    Zero { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to sampling configuration.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to exporting computed data.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`ConicError`].
pub type Result<T> = std::result::Result<T, ConicError>;
