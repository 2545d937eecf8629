//! Descriptive statistics over `f64` samples.
//!
//! The plain functions ([`mean`], [`variance`], [`deviation`]) are only defined for non-empty
//! samples and return `None` otherwise. The `safe_*` variants never fail: they map empty and
//! single-element samples to well-defined values so that partial game data still produces a
//! result.

/// Descriptive statistics summarizing a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values in the sample.
    pub count: usize,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The population variance (divided by N).
    pub variance: f64,
    /// The population standard deviation.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from a sample.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use fairplay_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let variance = population_variance(values, mean);
        Some(Self {
            count: values.len(),
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Returns `std_dev / mean`, or `None` when the ratio is not a finite number.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        let cv = self.std_dev / self.mean;
        cv.is_finite().then_some(cv)
    }
}

/// Arithmetic mean of a non-empty sample.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance of a non-empty sample (divides by N, not N - 1).
///
/// # Examples
///
/// ```
/// # use fairplay_stats::descriptive::variance;
/// assert_eq!(variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), Some(4.0));
/// assert_eq!(variance(&[3.0]), Some(0.0));
/// ```
#[must_use]
pub fn variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    Some(population_variance(values, mean))
}

/// Population standard deviation of a non-empty sample.
#[must_use]
pub fn deviation(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Coefficient of variation (`deviation / mean`) of a non-empty sample.
///
/// Returns `None` for an empty sample and for samples whose mean is zero, where the ratio
/// is undefined.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::descriptive::coefficient_of_variation;
/// assert_eq!(coefficient_of_variation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), Some(0.4));
/// assert_eq!(coefficient_of_variation(&[]), None);
/// assert_eq!(coefficient_of_variation(&[0.0, 0.0]), None);
/// ```
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    DescriptiveStats::new(values)?.coefficient_of_variation()
}

/// Mean that tolerates degenerate samples.
///
/// Returns `0.0` for an empty sample and the single value for a one-element sample.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::descriptive::safe_mean;
/// assert_eq!(safe_mean(&[]), 0.0);
/// assert_eq!(safe_mean(&[42.0]), 42.0);
/// assert_eq!(safe_mean(&[1.0, 3.0]), 2.0);
/// ```
#[must_use]
pub fn safe_mean(values: &[f64]) -> f64 {
    match values {
        [] => 0.0,
        [single] => *single,
        _ => mean(values).unwrap_or(0.0),
    }
}

/// Deviation that tolerates degenerate samples.
///
/// Returns `0.0` for samples with fewer than two values.
///
/// # Examples
///
/// ```
/// # use fairplay_stats::descriptive::safe_deviation;
/// assert_eq!(safe_deviation(&[]), 0.0);
/// assert_eq!(safe_deviation(&[42.0]), 0.0);
/// assert_eq!(safe_deviation(&[1.0, 3.0]), 1.0);
/// ```
#[must_use]
pub fn safe_deviation(values: &[f64]) -> f64 {
    match values {
        [] | [_] => 0.0,
        _ => deviation(values).unwrap_or(0.0),
    }
}

#[expect(clippy::cast_precision_loss)]
fn population_variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}
