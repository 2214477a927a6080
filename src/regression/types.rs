use std::fmt;

// ---------------------------------------------------------------------------
// Model – fitted line
// ---------------------------------------------------------------------------

/// Fitted line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model {
    slope: f64,
    intercept: f64,
}

impl Model {
    pub(crate) fn new(slope: f64, intercept: f64) -> Self {
        Model { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluate the line at `x` without input validation.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score = {:.4} · hours + {:.4}", self.slope, self.intercept)
    }
}

// ---------------------------------------------------------------------------
// FitStatistics / Prediction
// ---------------------------------------------------------------------------

/// In-sample goodness of fit of a [`Model`] on the set it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics {
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Mean squared residual.
    pub mse: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub input: f64,
    pub output: f64,
}
