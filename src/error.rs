//! Error types for conformity evaluation.

use thiserror::Error;

/// Result type alias for conformity operations.
pub type ConformityResult<T> = Result<T, ConformityError>;

/// Errors that can occur while building inputs or evaluating conformity.
#[derive(Debug, Error)]
pub enum ConformityError {
    /// Index-aligned input lists have different lengths.
    #[error("input `{input}` has {actual} entries, expected {expected} to match `points`")]
    LengthMismatch {
        /// Name of the offending input list.
        input: &'static str,
        /// Expected length (the length of the point list).
        expected: usize,
        /// Actual length of the offending list.
        actual: usize,
    },

    /// Neighborhood radius is zero, negative, or not finite.
    ///
    /// A non-positive radius makes every proximity test vacuously false and
    /// the decay weight ill-defined, so it is rejected up front instead of
    /// propagating NaN.
    #[error("neighborhood radius must be positive and finite, got {radius}")]
    NonPositiveRadius {
        /// The rejected radius value.
        radius: f64,
    },

    /// A parameter value outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
