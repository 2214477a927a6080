// ---------------------------------------------------------------------------
// Sample – one validated observation
// ---------------------------------------------------------------------------

/// A single (hours, score) observation.
///
/// Both components are guaranteed finite: the only way to build a `Sample`
/// is [`Sample::new`], which rejects NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    x: f64,
    y: f64,
}

impl Sample {
    /// Build a sample, or `None` if either component is non-finite.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        (x.is_finite() && y.is_finite()).then_some(Sample { x, y })
    }

    /// Independent variable (study hours).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Dependent variable (test score).
    pub fn y(&self) -> f64 {
        self.y
    }
}

// ---------------------------------------------------------------------------
// SampleSet – the validated dataset, in source row order
// ---------------------------------------------------------------------------

/// Ordered, immutable collection of validated samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Build a set from raw pairs, silently dropping non-finite ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs
            .into_iter()
            .filter_map(|(x, y)| Sample::new(x, y))
            .collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Smallest and largest observed x, or `None` for an empty set.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?.x;
        Some(self.samples.iter().fold((first, first), |(lo, hi), s| {
            (lo.min(s.x), hi.max(s.x))
        }))
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        SampleSet {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rejects_non_finite_components() {
        assert!(Sample::new(1.0, 2.0).is_some());
        assert!(Sample::new(f64::NAN, 2.0).is_none());
        assert!(Sample::new(1.0, f64::INFINITY).is_none());
        assert!(Sample::new(f64::NEG_INFINITY, f64::NAN).is_none());
    }

    #[test]
    fn from_pairs_keeps_order_and_drops_invalid() {
        let set = SampleSet::from_pairs([(3.0, 30.0), (f64::NAN, 1.0), (1.0, 10.0)]);
        let xs: Vec<f64> = set.iter().map(Sample::x).collect();
        assert_eq!(xs, vec![3.0, 1.0]);
    }

    #[test]
    fn x_range_spans_observed_values() {
        let set = SampleSet::from_pairs([(2.5, 0.0), (-1.0, 0.0), (7.0, 0.0)]);
        assert_eq!(set.x_range(), Some((-1.0, 7.0)));
        assert_eq!(SampleSet::default().x_range(), None);
    }
}
