//! Normal distribution helpers.
//!
//! [`error_function`] uses the Abramowitz-Stegun rational approximation (formula 7.1.26),
//! accurate to about 1.5e-7 over the whole real line. [`normal_cdf`] and
//! [`ConfidenceInterval`] are built on top of it and on [`crate::descriptive`].

use std::{cmp::Ordering, f64::consts::SQRT_2};

use crate::descriptive::DescriptiveStats;

const P: f64 = 0.327_591_1;
const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;

/// Two-sided z-score for a 95% confidence level.
pub const Z_95: f64 = 1.959_964;

/// Two-sided z-score for a 99% confidence level.
pub const Z_99: f64 = 2.575_829;

/// Approximates the Gauss error function.
///
/// The result is odd-symmetric (`erf(-x) == -erf(x)`), exactly zero at zero, and tends to
/// one as `x` grows. `NaN` propagates.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::distribution::error_function;
/// assert_eq!(error_function(0.0), 0.0);
/// assert!((error_function(1.0) - 0.842_700_79).abs() < 2e-7);
/// assert_eq!(error_function(-1.0), -error_function(1.0));
/// ```
#[must_use]
pub fn error_function(x: f64) -> f64 {
    let sign = match x.partial_cmp(&0.0) {
        Some(Ordering::Greater) => 1.0,
        Some(Ordering::Less) => -1.0,
        Some(Ordering::Equal) => return 0.0,
        None => return f64::NAN,
    };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Cumulative distribution function of the normal distribution `N(mean, sd²)` at `x`.
///
/// `sd` must be positive.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::distribution::normal_cdf;
/// assert_eq!(normal_cdf(0.0, 0.0, 1.0), 0.5);
/// assert!((normal_cdf(1.0, 0.0, 1.0) - 0.841_344_7).abs() < 1e-6);
/// ```
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> f64 {
    0.5 * (1.0 + error_function((x - mean) / (sd * SQRT_2)))
}

/// Confidence interval for the mean of a sample.
///
/// The interval is `mean ± z * sd / sqrt(n)` using the population deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Computes the interval around the sample mean for the two-sided z-score `z`.
    ///
    /// Returns `None` for an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fairplay_stats::distribution::ConfidenceInterval;
    /// let interval = ConfidenceInterval::from_sample(&[4.0, 6.0, 4.0, 6.0], 2.0).unwrap();
    /// assert_eq!(interval.lower, 4.0);
    /// assert_eq!(interval.upper, 6.0);
    /// assert!(interval.contains(5.0));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sample(values: &[f64], z: f64) -> Option<Self> {
        let stats = DescriptiveStats::new(values)?;
        let margin = z * stats.std_dev / (stats.count as f64).sqrt();
        Some(Self {
            lower: stats.mean - margin,
            upper: stats.mean + margin,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}
