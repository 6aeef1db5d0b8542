use serde::Serialize;

use crate::{normal::NormalDistribution, sample::SampleProportion};

/// Comparison of two independent binomial proportions.
///
/// The difference of the two sample proportions is evaluated against
/// `N(0, s1.variance + s2.variance)`, the normal approximation of the
/// sampling distribution of the difference when both proportions are equal.
///
/// A value built with [`DifferenceOfProportions::new`] holds only the two
/// samples; the derived fields stay zero until [`DifferenceOfProportions::test`]
/// returns a populated copy.
///
/// # Examples
///
/// ```
/// use proportion_stats::{difference::DifferenceOfProportions, sample::SampleProportion};
///
/// let s1 = SampleProportion::new(100.0, 50.0, None);
/// let s2 = SampleProportion::new(100.0, 40.0, None);
/// let result = DifferenceOfProportions::between(s1, s2);
///
/// assert!((result.difference() - 0.1).abs() < 1e-12);
/// assert!((result.variance() - 0.0049).abs() < 1e-12);
/// assert!((result.probability() - 0.9234).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferenceOfProportions {
    s1: SampleProportion,
    s2: SampleProportion,
    difference: f64,
    variance: f64,
    standard_deviation: f64,
    probability: f64,
}

impl DifferenceOfProportions {
    /// Pairs two samples without running the test.
    #[must_use]
    pub fn new(s1: SampleProportion, s2: SampleProportion) -> Self {
        Self {
            s1,
            s2,
            difference: 0.0,
            variance: 0.0,
            standard_deviation: 0.0,
            probability: 0.0,
        }
    }

    /// Pairs two samples and runs the test.
    #[must_use]
    pub fn between(s1: SampleProportion, s2: SampleProportion) -> Self {
        Self::new(s1, s2).test()
    }

    /// Runs the difference test and returns a populated copy.
    ///
    /// Only the samples' summary statistics are read; their z-score tables are
    /// neither required nor computed. When both samples have zero variance the
    /// fitted distribution degenerates to a step function, so the probability
    /// is `0.0`, `1.0`, or NaN for a zero difference.
    #[must_use]
    pub fn test(&self) -> Self {
        let difference = self.s1.mean() - self.s2.mean();
        let variance = self.s1.variance() + self.s2.variance();
        let standard_deviation = variance.sqrt();
        let probability = NormalDistribution::new(0.0, standard_deviation).cdf(difference);
        Self {
            s1: self.s1.clone(),
            s2: self.s2.clone(),
            difference,
            variance,
            standard_deviation,
            probability,
        }
    }

    /// The first sample.
    #[must_use]
    pub fn s1(&self) -> &SampleProportion {
        &self.s1
    }

    /// The second sample.
    #[must_use]
    pub fn s2(&self) -> &SampleProportion {
        &self.s2
    }

    /// `s1.mean - s2.mean`.
    #[must_use]
    pub fn difference(&self) -> f64 {
        self.difference
    }

    /// Sum of the two samples' sampling variances.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Square root of [`DifferenceOfProportions::variance`].
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Cumulative probability of the observed difference under `N(0, standard_deviation)`.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Number of standard deviations separating the two means.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.difference / self.standard_deviation
    }
}
