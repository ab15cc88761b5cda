//! Numeric primitives shared by the analysis sections.
//!
//! Moments and quantiles come from `u_numflow::stats`: sample (n - 1)
//! variance and linearly interpolated quantiles. Inputs may be in any order
//! and empty input yields `None` rather than a panic.

use lab_model::{DescriptiveStats, SampleStats, YieldStats};
use u_numflow::stats;

/// Evaluates a scale-equivariant statistic, retrying on the values divided by
/// their largest magnitude when the direct result overflows.
fn rescaled(values: &[f64], statistic: impl Fn(&[f64]) -> Option<f64>) -> Option<f64> {
    let direct = statistic(values);
    if direct.is_some_and(f64::is_finite) {
        return direct;
    }
    let scale = values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return direct;
    }
    let scaled: Vec<f64> = values.iter().map(|value| value / scale).collect();
    statistic(&scaled).map(|value| value * scale).or(direct)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    rescaled(values, stats::mean)
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    rescaled(values, stats::std_dev).unwrap_or(0.0)
}

/// Quantile with linear interpolation between the closest ranks.
///
/// # Examples
///
/// ```
/// use lab_analysis::stats::quantile;
///
/// let yields = [25.0, 10.0, 21.0, 90.0, 22.0, 23.0, 24.0, 20.0];
/// assert_eq!(quantile(&yields, 0.25), Some(20.75));
/// assert_eq!(quantile(&yields, 0.75), Some(24.25));
/// ```
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let q = q.clamp(0.0, 1.0);
    rescaled(values, |values| stats::quantile(values, q))
}

pub fn describe(values: &[f64]) -> Option<DescriptiveStats> {
    Some(DescriptiveStats {
        mean: mean(values)?,
        median: rescaled(values, stats::median)?,
        std: sample_std(values),
        min: stats::min(values)?,
        max: stats::max(values)?,
        q25: quantile(values, 0.25)?,
        q75: quantile(values, 0.75)?,
    })
}

pub fn yield_stats(values: &[f64]) -> Option<YieldStats> {
    Some(YieldStats {
        mean: mean(values)?,
        std: sample_std(values),
        min: stats::min(values)?,
        max: stats::max(values)?,
    })
}

pub fn sample_stats(values: &[f64]) -> Option<SampleStats> {
    Some(SampleStats {
        mean: mean(values)?,
        total: values.iter().sum(),
        std: sample_std(values),
    })
}

/// Least-squares slope of `values` against their position (0, 1, 2, ...).
///
/// `None` for fewer than two points.
pub fn slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let positions: Vec<f64> = (0..values.len()).map(|index| index as f64).collect();
    let spread = stats::variance(&positions)?;
    rescaled(values, |values| {
        stats::covariance(&positions, values).map(|covariance| covariance / spread)
    })
}

/// `part` as a percentage of `total`; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
