//! Sample accumulation and summary statistics.

use crate::error::{BenchError, Result};

/// Mean and population variance of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
}

/// Elapsed-time samples (seconds) for one strategy/phase pair.
///
/// Samples are only ever appended. Negative values are kept as recorded.
#[derive(Debug, Default, Clone)]
pub struct StatAccumulator {
    samples: Vec<f64>,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, sample: f64) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Most recently recorded sample.
    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Arithmetic mean of all samples.
    pub fn mean(&self) -> Result<f64> {
        if self.samples.is_empty() {
            return Err(BenchError::EmptyAccumulator);
        }
        let sum: f64 = self.samples.iter().sum();
        Ok(sum / self.samples.len() as f64)
    }

    /// Population variance (divides by the sample count).
    pub fn variance(&self) -> Result<f64> {
        let mean = self.mean()?;
        Ok(self.variance_around(mean))
    }

    /// Mean and variance, with the variance taken around that same mean.
    pub fn summary(&self) -> Result<Summary> {
        let mean = self.mean()?;
        Ok(Summary {
            mean,
            variance: self.variance_around(mean),
        })
    }

    fn variance_around(&self, mean: f64) -> f64 {
        let sum: f64 = self.samples.iter().map(|d| (d - mean).powi(2)).sum();
        sum / self.samples.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn accumulator(samples: &[f64]) -> StatAccumulator {
        let mut acc = StatAccumulator::new();
        for &s in samples {
            acc.record(s);
        }
        acc
    }

    #[test]
    fn test_empty_accumulator_fails() {
        let acc = StatAccumulator::new();
        assert_eq!(acc.mean(), Err(BenchError::EmptyAccumulator));
        assert_eq!(acc.variance(), Err(BenchError::EmptyAccumulator));
        assert!(acc.summary().is_err());
        assert_eq!(acc.last(), None);
    }

    #[test]
    fn test_mean_single_sample() {
        assert_abs_diff_eq!(accumulator(&[0.25]).mean().unwrap(), 0.25);
    }

    #[test]
    fn test_mean_repeated_sample() {
        assert_abs_diff_eq!(accumulator(&[0.25, 0.25]).mean().unwrap(), 0.25);
    }

    #[test]
    fn test_mean_two_samples() {
        assert_abs_diff_eq!(accumulator(&[1.0, 4.0]).mean().unwrap(), 2.5);
    }

    #[test]
    fn test_variance_constant_is_zero() {
        assert_abs_diff_eq!(accumulator(&[3.0, 3.0, 3.0]).variance().unwrap(), 0.0);
    }

    #[test]
    fn test_variance_divides_by_count() {
        assert_abs_diff_eq!(accumulator(&[0.0, 2.0]).variance().unwrap(), 1.0);
    }

    #[test]
    fn test_negative_samples_kept() {
        let acc = accumulator(&[-1.0, 1.0]);
        assert_eq!(acc.len(), 2);
        assert_abs_diff_eq!(acc.mean().unwrap(), 0.0);
        assert_abs_diff_eq!(acc.variance().unwrap(), 1.0);
        assert_eq!(acc.last(), Some(1.0));
    }

    #[test]
    fn test_summary_matches_parts() {
        let acc = accumulator(&[0.1, 0.4, 0.2, 0.9]);
        let summary = acc.summary().unwrap();
        assert_eq!(summary.mean, acc.mean().unwrap());
        assert_eq!(summary.variance, acc.variance().unwrap());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_variance_non_negative(
            samples in prop::collection::vec(-1.0f64..1.0, 1..100)
        ) {
            let mut acc = StatAccumulator::new();
            for s in &samples {
                acc.record(*s);
            }
            prop_assert!(acc.variance().unwrap() >= 0.0);
        }

        #[test]
        fn prop_mean_within_bounds(
            samples in prop::collection::vec(0.0f64..10.0, 1..100)
        ) {
            let mut acc = StatAccumulator::new();
            for s in &samples {
                acc.record(*s);
            }
            let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = acc.mean().unwrap();
            prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
        }

        #[test]
        fn prop_summary_deterministic(
            samples in prop::collection::vec(0.0f64..1.0, 1..50)
        ) {
            let mut acc = StatAccumulator::new();
            for s in &samples {
                acc.record(*s);
            }
            prop_assert_eq!(acc.summary().unwrap(), acc.summary().unwrap());
        }
    }
}
