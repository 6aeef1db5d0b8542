use serde::Serialize;

use crate::normal::NormalDistribution;

/// Canonical z-offsets used when no explicit offsets are supplied.
pub const DEFAULT_Z_OFFSETS: [f64; 7] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

/// A single point on a normal distribution curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScore {
    /// The raw proportion at this point.
    pub value: f64,
    /// Number of standard deviations `value` lies from the mean.
    pub z: f64,
    /// Cumulative probability at `value`.
    pub probability: f64,
}

impl ZScore {
    fn at(dist: &NormalDistribution, value: f64, z: f64) -> Self {
        Self {
            value,
            z,
            probability: dist.cdf(value),
        }
    }
}

/// Z-scores of a sample relative to the normal distribution fitted to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZScoreTable {
    /// One entry per requested offset, in the order the offsets were given.
    pub base: Vec<ZScore>,
    /// The comparison count's z-score, if the sample carries a comparison.
    pub compare: Option<ZScore>,
}

/// Summary of one binomial experiment.
///
/// The mean, variance and standard deviation describe the sampling
/// distribution of the proportion `p̂ = successes / trials`, approximated as
/// `N(p̂, p̂(1 − p̂) / trials)`. They are computed once at construction and are
/// read-only afterwards.
///
/// Inputs are not validated. `trials == 0` and similar degenerate inputs
/// produce NaN or infinite statistics following IEEE-754 arithmetic.
///
/// # Examples
///
/// ```
/// use proportion_stats::sample::SampleProportion;
///
/// let mut sample = SampleProportion::new(100.0, 50.0, Some(60.0));
/// assert_eq!(sample.mean(), 0.5);
/// assert!((sample.standard_deviation() - 0.05).abs() < 1e-12);
///
/// sample.compute_z_scores();
/// assert_eq!(sample.base_z_scores().len(), 7);
/// let compare = sample.compare_z_score().unwrap();
/// assert!((compare.z - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleProportion {
    trials: f64,
    successes: f64,
    compare: Option<f64>,
    mean: f64,
    variance: f64,
    standard_deviation: f64,
    base_z_scores: Vec<ZScore>,
    compare_z_score: Option<ZScore>,
}

impl SampleProportion {
    /// Builds a sample and computes its summary statistics.
    ///
    /// # Arguments
    ///
    /// * `trials` - Number of Bernoulli trials, expected to be positive
    /// * `successes` - Number of successes, expected in `[0, trials]`
    /// * `compare` - An externally observed count to evaluate against this
    ///   sample's distribution, if any. Negative counts are kept but never
    ///   produce a comparison z-score.
    #[must_use]
    pub fn new(trials: f64, successes: f64, compare: Option<f64>) -> Self {
        let mean = successes / trials;
        let variance = mean * (1.0 - mean) / trials;
        let standard_deviation = variance.sqrt();
        Self {
            trials,
            successes,
            compare,
            mean,
            variance,
            standard_deviation,
            base_z_scores: vec![],
            compare_z_score: None,
        }
    }

    /// Builds a sample where a non-positive `compare` means "no comparison".
    ///
    /// A comparison count of exactly zero cannot be expressed through this
    /// constructor; use [`SampleProportion::new`] with `Some(0.0)` for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use proportion_stats::sample::SampleProportion;
    ///
    /// assert_eq!(SampleProportion::from_counts(100.0, 50.0, 0.0).compare(), None);
    /// assert_eq!(SampleProportion::from_counts(100.0, 50.0, 60.0).compare(), Some(60.0));
    /// ```
    #[must_use]
    pub fn from_counts(trials: f64, successes: f64, compare: f64) -> Self {
        let compare = (compare > 0.0).then_some(compare);
        Self::new(trials, successes, compare)
    }

    /// Number of trials the sample was built from.
    #[must_use]
    pub fn trials(&self) -> f64 {
        self.trials
    }

    /// Number of successes the sample was built from.
    #[must_use]
    pub fn successes(&self) -> f64 {
        self.successes
    }

    /// The comparison count, if one was supplied.
    #[must_use]
    pub fn compare(&self) -> Option<f64> {
        self.compare
    }

    /// The sample proportion `successes / trials`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Variance of the sampling distribution of the proportion.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Standard deviation of the sampling distribution of the proportion.
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Z-scores stored by the last call to [`SampleProportion::compute_z_scores`].
    ///
    /// Empty until z-scores have been computed.
    #[must_use]
    pub fn base_z_scores(&self) -> &[ZScore] {
        &self.base_z_scores
    }

    /// Comparison z-score stored by the last z-score computation, if any.
    #[must_use]
    pub fn compare_z_score(&self) -> Option<ZScore> {
        self.compare_z_score
    }

    /// The normal distribution fitted to this sample.
    #[must_use]
    pub fn distribution(&self) -> NormalDistribution {
        NormalDistribution::new(self.mean, self.standard_deviation)
    }

    /// Computes z-scores at the given offsets without modifying the sample.
    ///
    /// Each offset `k` yields the point `mean + k * standard_deviation`. If
    /// the sample carries a non-negative comparison count `c`, the table also
    /// holds the z-score of the proportion `c / trials`.
    ///
    /// # Examples
    ///
    /// ```
    /// use proportion_stats::sample::SampleProportion;
    ///
    /// let sample = SampleProportion::new(100.0, 50.0, None);
    /// let table = sample.z_scores(&[0.0, 1.0]);
    /// assert_eq!(table.base[0].value, 0.5);
    /// assert_eq!(table.base[0].probability, 0.5);
    /// assert!((table.base[1].value - 0.55).abs() < 1e-12);
    /// assert!(table.compare.is_none());
    /// ```
    #[must_use]
    pub fn z_scores(&self, offsets: &[f64]) -> ZScoreTable {
        let dist = self.distribution();
        let base = offsets
            .iter()
            .map(|&k| ZScore::at(&dist, self.mean + self.standard_deviation * k, k))
            .collect();
        let compare = self.compare.filter(|&count| count >= 0.0).map(|count| {
            let value = count / self.trials;
            ZScore::at(&dist, value, dist.z(value))
        });
        ZScoreTable { base, compare }
    }

    /// Computes z-scores at [`DEFAULT_Z_OFFSETS`] and stores them in the sample.
    ///
    /// Any previously stored z-scores are replaced, so calling this more than
    /// once leaves the same table in place.
    pub fn compute_z_scores(&mut self) {
        self.compute_z_scores_with(&DEFAULT_Z_OFFSETS);
    }

    /// Like [`SampleProportion::compute_z_scores`], with explicit offsets.
    pub fn compute_z_scores_with(&mut self, offsets: &[f64]) {
        let ZScoreTable { base, compare } = self.z_scores(offsets);
        self.base_z_scores = base;
        self.compare_z_score = compare;
    }
}
