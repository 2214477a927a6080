use crate::data::model::SampleSet;

use super::error::RegressionError;
use super::types::Model;

/// Ordinary least-squares fit of `score = slope · hours + intercept`.
///
/// ```text
/// slope     = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²
/// intercept = ȳ − slope · x̄
/// ```
///
/// Sums are accumulated in sample order, so the same set always produces
/// bit-identical coefficients.
pub fn fit(samples: &SampleSet) -> Result<Model, RegressionError> {
    if samples.is_empty() {
        return Err(RegressionError::InsufficientData);
    }

    let mean_x = mean(samples.iter().map(|s| s.x()));
    let mean_y = mean(samples.iter().map(|s| s.y()));

    let (sxy, sxx) = samples.iter().fold((0.0, 0.0), |(sxy, sxx), s| {
        let dx = s.x() - mean_x;
        (sxy + dx * (s.y() - mean_y), sxx + dx * dx)
    });

    if sxx == 0.0 || all_equal(samples.iter().map(|s| s.x())) {
        log::warn!("Cannot fit {} samples: zero variance in hours", samples.len());
        return Err(RegressionError::DegenerateInput);
    }
    ensure_finite("hours variance", sxx)?;
    ensure_finite("hours/score covariance", sxy)?;

    let slope = ensure_finite("slope", sxy / sxx)?;
    let intercept = ensure_finite("intercept", mean_y - slope * mean_x)?;
    let model = Model::new(slope, intercept);
    log::info!("Fitted {model} on {} samples", samples.len());
    Ok(model)
}

/// Arithmetic mean as a running update, so finite values near `f64::MAX`
/// do not overflow an intermediate sum.
pub(super) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    values
        .enumerate()
        .fold(0.0, |m, (i, v)| m + (v - m) / (i + 1) as f64)
}

/// Pass `value` through, or fail with `NumericOverflow` naming `what`.
pub(super) fn ensure_finite(what: &'static str, value: f64) -> Result<f64, RegressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::warn!("Numeric overflow computing {what}");
        Err(RegressionError::NumericOverflow(what))
    }
}

/// Whether every value is bit-identical to the first.
///
/// The mean of repeated decimals like `0.1` can carry rounding residue, so a
/// constant column must be detected directly rather than through its
/// deviations.
pub(super) fn all_equal(mut values: impl Iterator<Item = f64>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v.to_bits() == first.to_bits()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sse(samples: &SampleSet, slope: f64, intercept: f64) -> f64 {
        samples
            .iter()
            .map(|s| (s.y() - (slope * s.x() + intercept)).powi(2))
            .sum()
    }

    #[test]
    fn perfect_line_recovers_coefficients() {
        let samples = SampleSet::from_pairs([(1.0, 50.0), (2.0, 60.0), (3.0, 70.0), (4.0, 80.0)]);
        let model = fit(&samples).unwrap();
        assert!((model.slope() - 10.0).abs() < 1e-12);
        assert!((model.intercept() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn empty_set_is_insufficient() {
        assert_eq!(fit(&SampleSet::default()), Err(RegressionError::InsufficientData));
    }

    #[test]
    fn constant_hours_are_degenerate() {
        let samples = SampleSet::from_pairs([(5.0, 60.0), (5.0, 70.0), (5.0, 80.0)]);
        assert_eq!(fit(&samples), Err(RegressionError::DegenerateInput));
    }

    #[test]
    fn constant_non_representable_hours_are_degenerate() {
        let samples = SampleSet::from_pairs([(0.1, 1.0), (0.1, 2.0), (0.1, 3.0), (0.1, 4.0)]);
        assert_eq!(fit(&samples), Err(RegressionError::DegenerateInput));
    }

    #[test]
    fn single_sample_is_degenerate() {
        let samples = SampleSet::from_pairs([(3.0, 42.0)]);
        assert_eq!(fit(&samples), Err(RegressionError::DegenerateInput));
    }

    #[test]
    fn constant_scores_give_flat_line() {
        let samples = SampleSet::from_pairs([(1.0, 50.0), (2.0, 50.0), (3.0, 50.0)]);
        let model = fit(&samples).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert_eq!(model.intercept(), 50.0);
    }

    #[test]
    fn fit_is_deterministic() {
        let samples = SampleSet::from_pairs(
            (0..50).map(|i| (i as f64 * 0.37, 12.0 + 3.3 * i as f64 + (i as f64).sin())),
        );
        let a = fit(&samples).unwrap();
        let b = fit(&samples).unwrap();
        assert_eq!(a.slope().to_bits(), b.slope().to_bits());
        assert_eq!(a.intercept().to_bits(), b.intercept().to_bits());
    }

    #[test]
    fn fit_minimizes_squared_error_over_grid() {
        let samples = SampleSet::from_pairs(
            (0..30).map(|i| {
                let x = i as f64 * 0.5;
                (x, 35.0 + 5.5 * x + 4.0 * (i as f64 * 1.7).sin())
            }),
        );
        let model = fit(&samples).unwrap();
        let best = sse(&samples, model.slope(), model.intercept());

        for i in -20..=20 {
            for j in -20..=20 {
                let m = model.slope() + i as f64 * 0.05;
                let b = model.intercept() + j as f64 * 0.25;
                assert!(
                    best <= sse(&samples, m, b) + 1e-9,
                    "grid point m={m}, b={b} beats the fit"
                );
            }
        }
    }

    #[test]
    fn huge_hours_overflow_explicitly() {
        let samples = SampleSet::from_pairs([(1e308, 1.0), (1.5e308, 2.0), (1.7e308, 3.0)]);
        assert!(matches!(fit(&samples), Err(RegressionError::NumericOverflow(_))));
    }

    #[test]
    fn opposite_extremes_overflow_explicitly() {
        let samples = SampleSet::from_pairs([(-1.7e308, 1.0), (1.7e308, 2.0)]);
        assert!(matches!(fit(&samples), Err(RegressionError::NumericOverflow(_))));
    }

    #[test]
    fn large_finite_scores_still_fit() {
        let samples = SampleSet::from_pairs([(1.0, 1e308), (2.0, 1.6e308), (3.0, 1.7e308)]);
        let model = fit(&samples).unwrap();
        assert!(model.slope().is_finite() && model.intercept().is_finite());
        assert!((model.slope() / 3.5e307 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn running_mean_handles_values_near_max() {
        let m = mean([f64::MAX, f64::MAX, f64::MAX].into_iter());
        assert_eq!(m, f64::MAX);
        assert!((mean([1.0, 2.0, 3.0, 4.0].into_iter()) - 2.5).abs() < 1e-15);
    }

    #[test]
    fn all_equal_compares_bits() {
        assert!(all_equal([2.0, 2.0, 2.0].into_iter()));
        assert!(!all_equal([2.0, 2.0 + f64::EPSILON * 2.0].into_iter()));
        assert!(all_equal(std::iter::empty()));
    }
}
