use thiserror::Error;

/// Statistically undefined outcomes of the fit/evaluate/predict pipeline.
///
/// None of these are ever replaced by a placeholder number; the caller
/// decides how to present them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegressionError {
    #[error("no valid samples to work with")]
    InsufficientData,

    /// Every x is identical, so the slope is undefined.
    #[error("all hour values are identical; slope is undefined")]
    DegenerateInput,

    /// Every y is identical, so R² is undefined.
    #[error("all score values are identical; R² is undefined")]
    DegenerateTarget,

    #[error("cannot predict for non-finite input {0}")]
    InvalidInput(f64),

    /// Finite inputs whose sums or products exceed the `f64` range.
    #[error("values too large: {0} overflowed")]
    NumericOverflow(&'static str),
}
