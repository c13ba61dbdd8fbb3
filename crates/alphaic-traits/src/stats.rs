//! Sample statistics for one-dimensional cross-sections.
//!
//! All estimators use the N-1 denominator (Bessel's correction), so the ratio
//! `covariance / (std_x * std_y)` is exactly the Pearson correlation.

use ndarray::{Array1, ArrayView1};

/// Minimum threshold for standard deviation to avoid division by zero.
/// Values at or below this threshold are treated as zero variance. Applied to
/// rows rescaled by [`rescale_max_abs`], so it is relative to the row's size.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Whether every value equals the first one exactly.
///
/// An empty slice counts as constant.
pub fn is_constant(values: ArrayView1<'_, f64>) -> bool {
    match values.first() {
        Some(&first) => values.iter().all(|&x| x == first),
        None => true,
    }
}

/// Divide every value by the largest absolute value.
///
/// The result lies in `[-1, 1]`, so sums of squares cannot overflow and the
/// standard deviation becomes independent of the row's magnitude. Returns
/// `None` if the largest absolute value is zero or not finite.
pub fn rescale_max_abs(values: ArrayView1<'_, f64>) -> Option<Array1<f64>> {
    let scale = values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }
    Some(values.mapv(|x| x / scale))
}

/// Sample variance with N-1 denominator, or `None` with fewer than 2 values.
///
/// # Examples
///
/// ```
/// use alphaic_traits::stats::sample_variance;
/// use ndarray::array;
///
/// let v = sample_variance(array![1.0, 2.0, 3.0, 4.0].view()).unwrap();
/// assert!((v - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn sample_variance(values: ArrayView1<'_, f64>) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.sum() / n as f64;
    let ss: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    Some(ss / (n - 1) as f64)
}

/// Sample standard deviation with N-1 denominator.
pub fn sample_std(values: ArrayView1<'_, f64>) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Sample covariance with N-1 denominator.
///
/// Returns `None` if the lengths differ or fewer than 2 pairs are available.
pub fn sample_covariance(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Option<f64> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }
    let mean_x = x.sum() / n as f64;
    let mean_y = y.sum() / n as f64;
    let cross: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    Some(cross / (n - 1) as f64)
}

/// Position of the first non-finite value, if any.
pub fn first_non_finite(values: ArrayView1<'_, f64>) -> Option<usize> {
    values.iter().position(|x| !x.is_finite())
}
