//! Statistics for binomial proportions.
//!
//! This crate summarizes binomial experiments and compares two of them with
//! the normal approximation:
//!
//! - **Sample proportions**: mean, variance and standard deviation of the
//!   sampling distribution of `successes / trials`, plus z-score tables
//! - **Difference of proportions**: two-proportion z-test between two samples
//! - **Normal distribution**: the shared CDF used by both
//!
//! All computations are plain floating-point arithmetic. Inputs are not
//! validated; degenerate inputs (zero trials, zero variance) surface as NaN or
//! infinite values.
//!
//! # Modules
//!
//! - [`sample`]: Summary statistics and z-scores for one sample
//! - [`difference`]: Comparison of two samples
//! - [`normal`]: Normal distribution CDF
//!
//! # Examples
//!
//! ## Summarizing a sample
//!
//! ```
//! use proportion_stats::sample::SampleProportion;
//!
//! let mut sample = SampleProportion::new(100.0, 50.0, None);
//! assert_eq!(sample.mean(), 0.5);
//!
//! sample.compute_z_scores();
//! let center = sample.base_z_scores()[3];
//! assert_eq!(center.value, 0.5);
//! assert_eq!(center.probability, 0.5);
//! ```
//!
//! ## Comparing two samples
//!
//! ```
//! use proportion_stats::{difference::DifferenceOfProportions, sample::SampleProportion};
//!
//! let s1 = SampleProportion::new(100.0, 50.0, None);
//! let s2 = SampleProportion::new(100.0, 40.0, None);
//! let result = DifferenceOfProportions::new(s1, s2).test();
//! assert!((result.standard_deviation() - 0.07).abs() < 1e-12);
//! ```

pub mod difference;
pub mod normal;
pub mod sample;
