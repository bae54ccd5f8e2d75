//! Error types for tuning and trajectory operations.

use thiserror::Error;

/// Result type for tuning operations.
pub type Result<T> = std::result::Result<T, TuningError>;

/// Errors that can occur while selecting, editing or interpolating tunings.
///
/// Every variant is local and recoverable; no operation that returns one of
/// these leaves a partially updated tuning behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// Preset index or name not present in the catalog.
    #[error("unknown preset: {id}")]
    UnknownPreset {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Curve index or name not one of the known curve kinds.
    #[error("unknown interpolation curve: {id}")]
    UnknownCurve {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Source and destination tunings have different numbers of degrees.
    #[error("degree count mismatch: source has {source_len} ratios, destination has {dest_len}")]
    DegreeCountMismatch {
        /// Number of source ratios.
        source_len: usize,
        /// Number of destination ratios.
        dest_len: usize,
    },

    /// Exponential interpolation needs two strictly positive endpoints.
    #[error("exponential interpolation requires positive endpoints (got {start} -> {end})")]
    InvalidExponentialDomain {
        /// Value at mix position 0.
        start: f64,
        /// Value at mix position 1.
        end: f64,
    },

    /// A ratio field could not be parsed as a number.
    #[error("invalid numerical input (step {step} - {input:?})")]
    InvalidNumericInput {
        /// 1-based scale degree of the offending field.
        step: usize,
        /// The raw text of the field.
        input: String,
    },
}
