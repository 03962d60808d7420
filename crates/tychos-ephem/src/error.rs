//! Ephemerides error types.

use tychos_time::TimeError;

/// Errors raised when submitting or exporting an ephemerides run.
#[derive(Debug, thiserror::Error)]
pub enum EphemError {
    /// The request names no bodies.
    #[error("select at least one body")]
    NoBodies,

    /// A start or end date/time that does not parse or does not exist.
    #[error("invalid {field}: {source}")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: TimeError,
    },

    /// Step size that is zero, negative or not finite.
    #[error("step size must be a positive number, got {0}")]
    InvalidStepSize(f64),

    /// Unrecognised step unit name.
    #[error("unknown step unit '{0}'")]
    UnknownStepUnit(String),

    /// The run would exceed the row ceiling.
    #[error("{steps} steps x {bodies} bodies = {rows} rows exceeds the limit of {limit}")]
    TooManyRows {
        steps: u64,
        bodies: usize,
        rows: u64,
        limit: u64,
    },

    /// A run is already in progress.
    #[error("an ephemerides run is already in progress")]
    AlreadyGenerating,

    /// Failed to write an export file.
    #[error("failed to write export: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to serialize results to JSON.
    #[error("failed to serialize ephemerides: {0}")]
    SerializeError(#[source] serde_json::Error),
}
