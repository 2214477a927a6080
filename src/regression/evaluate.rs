use crate::data::model::SampleSet;

use super::error::RegressionError;
use super::fit::{all_equal, ensure_finite, mean};
use super::types::{FitStatistics, Model, Prediction};

/// Goodness of fit of `model` against the set it was fitted on.
///
/// R² is computed against the mean of the same set (in-sample R²).
pub fn evaluate(model: &Model, samples: &SampleSet) -> Result<FitStatistics, RegressionError> {
    if samples.is_empty() {
        return Err(RegressionError::InsufficientData);
    }

    let n = samples.len();
    let mean_y = mean(samples.iter().map(|s| s.y()));

    let (ss_total, ss_residual) = samples.iter().fold((0.0, 0.0), |(tot, res), s| {
        let residual = s.y() - model.value_at(s.x());
        (tot + (s.y() - mean_y).powi(2), res + residual * residual)
    });

    if ss_total == 0.0 || all_equal(samples.iter().map(|s| s.y())) {
        log::warn!("R² undefined: all {n} scores are identical");
        return Err(RegressionError::DegenerateTarget);
    }

    ensure_finite("total sum of squares", ss_total)?;
    ensure_finite("residual sum of squares", ss_residual)?;

    Ok(FitStatistics {
        r_squared: ensure_finite("R²", 1.0 - ss_residual / ss_total)?,
        mse: ensure_finite("MSE", ss_residual / n as f64)?,
    })
}

/// Predicted score for `hours`.
///
/// Any finite input is accepted, including values outside the range the
/// model was fitted on. A finite input can still push `slope · hours`
/// past the `f64` range; that fails with `NumericOverflow`, so a returned
/// `output` is always finite.
pub fn predict(model: &Model, hours: f64) -> Result<Prediction, RegressionError> {
    if !hours.is_finite() {
        return Err(RegressionError::InvalidInput(hours));
    }
    Ok(Prediction {
        input: hours,
        output: ensure_finite("prediction", model.value_at(hours))?,
    })
}
