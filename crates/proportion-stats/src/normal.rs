//! Normal distribution CDF shared by the sample and difference computations.
//!
//! The cumulative distribution function is evaluated through the
//! complementary error function:
//!
//! ```text
//! Φ(t) = ½ · erfc(−t / √2)
//! ```
//!
//! which is algebraically identical to `½ · (1 + erf(t / √2))` but keeps full
//! precision in the lower tail.
//!
//! No parameter validation is performed. A zero `sigma` produces a step
//! function (`0.0` below the mean, `1.0` above it, NaN at the mean) and NaN
//! inputs produce NaN.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

/// A normal distribution `N(mu, sigma²)`.
///
/// # Examples
///
/// ```
/// use proportion_stats::normal::NormalDistribution;
///
/// let dist = NormalDistribution::new(0.5, 0.05);
/// assert_eq!(dist.cdf(0.5), 0.5);
/// assert!((dist.cdf(0.55) - 0.841_344_746_068_542_9).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDistribution {
    /// Mean of the distribution.
    pub mu: f64,
    /// Standard deviation of the distribution.
    pub sigma: f64,
}

impl NormalDistribution {
    /// Creates `N(mu, sigma²)` without validating `sigma`.
    #[must_use]
    pub const fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// The standard normal distribution `N(0, 1)`.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Number of standard deviations `x` lies from the mean.
    #[must_use]
    pub fn z(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }

    /// Probability that a value drawn from this distribution is `<= x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        standard_normal_cdf(self.z(x))
    }
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cumulative distribution function of `N(mu, sigma²)` evaluated at `x`.
///
/// # Examples
///
/// ```
/// use proportion_stats::normal::normal_cdf;
///
/// assert_eq!(normal_cdf(0.0, 0.0, 0.07), 0.5);
/// assert!((normal_cdf(0.1, 0.0, 0.07) - 0.923_436_9).abs() < 1e-6);
/// ```
#[must_use]
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    NormalDistribution::new(mu, sigma).cdf(x)
}

/// Standard normal CDF `Φ(t)`.
#[must_use]
pub fn standard_normal_cdf(t: f64) -> f64 {
    0.5 * erfc(-t / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values of Φ(t) at integer points.
    const PHI: [(f64, f64); 7] = [
        (-3.0, 0.001_349_898_031_630_094_6),
        (-2.0, 0.022_750_131_948_179_21),
        (-1.0, 0.158_655_253_931_457_05),
        (0.0, 0.5),
        (1.0, 0.841_344_746_068_542_9),
        (2.0, 0.977_249_868_051_820_8),
        (3.0, 0.998_650_101_968_369_9),
    ];

    #[test]
    fn test_standard_cdf_reference_values() {
        for (t, expected) in PHI {
            let actual = standard_normal_cdf(t);
            let rel = ((actual - expected) / expected).abs();
            assert!(rel < 1e-10, "Φ({t}) = {actual}, expected {expected}");
        }
    }

    #[test]
    fn test_cdf_at_mean_is_exactly_half() {
        for (mu, sigma) in [(0.0, 1.0), (0.5, 0.05), (0.123, 0.0042), (-7.5, 3.0)] {
            assert_eq!(normal_cdf(mu, mu, sigma), 0.5);
        }
    }

    #[test]
    fn test_cdf_symmetry() {
        let dist = NormalDistribution::new(0.3, 0.02);
        for k in [0.5, 1.0, 1.7, 2.5] {
            let lower = dist.cdf(0.3 - k * 0.02);
            let upper = dist.cdf(0.3 + k * 0.02);
            assert!((lower + upper - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_lower_tail_precision() {
        // Φ(-10) ≈ 7.62e-24; computing 1 - Φ(10) would lose it entirely.
        let p = standard_normal_cdf(-10.0);
        assert!(((p - 7.619_853_024_160_527e-24) / p).abs() < 1e-10);
    }

    #[test]
    fn test_zero_sigma_is_step_function() {
        let dist = NormalDistribution::new(0.0, 0.0);
        assert_eq!(dist.cdf(0.1), 1.0);
        assert_eq!(dist.cdf(-0.1), 0.0);
        assert!(dist.cdf(0.0).is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(normal_cdf(f64::NAN, 0.0, 1.0).is_nan());
        assert!(normal_cdf(0.0, f64::NAN, 1.0).is_nan());
        assert!(normal_cdf(0.0, 0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_scaled_cdf_within_tolerance() {
        // erfc is accurate to about 1e-11 relative near t = 1.
        let dist = NormalDistribution::new(0.5, 0.05);
        let expected = 0.841_344_746_068_542_9;
        assert!(((dist.cdf(0.55) - expected) / expected).abs() < 1e-10);
    }

    #[test]
    fn test_z() {
        let dist = NormalDistribution::new(0.5, 0.05);
        assert!((dist.z(0.6) - 2.0).abs() < 1e-12);
        assert_eq!(NormalDistribution::default(), NormalDistribution::standard());
    }
}
