//! Information Coefficient (IC) calculations.
//!
//! The IC of an alpha is the Pearson correlation between its scores and the
//! realized returns, taken across assets on each day and averaged over days.
//! Every condition that would make a day's correlation undefined is reported
//! as an [`IcError`] rather than a NaN.

use crate::config::IcConfig;
use alphaic_traits::{
    IcError, Result, Series, Shape,
    stats::{first_non_finite, is_constant, rescale_max_abs, sample_covariance, sample_std},
};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis, parallel::prelude::*};
use tracing::{debug, trace};

/// Calculate the Information Coefficient between an alpha and returns.
///
/// Both matrices are `(days, assets)`. The result is the mean over days of
/// `cov(alpha[d], returns[d]) / (std(alpha[d]) * std(returns[d]))`, using
/// sample statistics, so each day's term is the Pearson correlation.
///
/// # Arguments
///
/// * `alpha` - Alpha scores, one row per day
/// * `returns` - Realized returns with the same shape
/// * `num_days` - Number of days, which must equal the number of rows
///
/// # Errors
///
/// Fails with [`IcError::ShapeMismatch`], [`IcError::DayCountMismatch`],
/// [`IcError::NoData`], or the first per-day failure (see [`daily_ic`]).
///
/// # Example
///
/// ```
/// use alphaic_eval::compute_ic;
/// use ndarray::array;
///
/// let alpha = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let returns = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let ic = compute_ic(alpha.view(), returns.view(), 2).unwrap();
/// assert!((ic - 1.0).abs() < 1e-12);
/// ```
pub fn compute_ic(
    alpha: ArrayView2<'_, f64>,
    returns: ArrayView2<'_, f64>,
    num_days: usize,
) -> Result<f64> {
    compute_ic_with(alpha, returns, num_days, &IcConfig::default())
}

/// Calculate the Information Coefficient with an explicit configuration.
///
/// See [`compute_ic`].
pub fn compute_ic_with(
    alpha: ArrayView2<'_, f64>,
    returns: ArrayView2<'_, f64>,
    num_days: usize,
    config: &IcConfig,
) -> Result<f64> {
    check_shapes(&alpha, &returns)?;
    if num_days != alpha.nrows() {
        return Err(IcError::DayCountMismatch {
            num_days,
            rows: alpha.nrows(),
        });
    }

    let series = ic_series(alpha, returns, config)?;
    let ic = series.mean().ok_or(IcError::NoData)?;
    debug!(ic, days = num_days, "computed IC");
    Ok(ic)
}

/// Calculate the per-day IC series.
///
/// Element `d` of the result is the correlation between `alpha[d]` and
/// `returns[d]`. With `config.parallel` set, days are evaluated on the rayon
/// thread pool; the reported error is always the one for the lowest failing
/// day, so both modes fail identically.
///
/// # Errors
///
/// Fails with [`IcError::InvalidConfig`], [`IcError::ShapeMismatch`],
/// [`IcError::NoData`], or the first per-day failure.
pub fn ic_series(
    alpha: ArrayView2<'_, f64>,
    returns: ArrayView2<'_, f64>,
    config: &IcConfig,
) -> Result<Array1<f64>> {
    config.validate()?;
    check_shapes(&alpha, &returns)?;

    let (days, assets) = alpha.dim();
    if days == 0 {
        return Err(IcError::NoData);
    }
    debug!(days, assets, parallel = config.parallel, "computing IC series");

    let terms: Vec<Result<f64>> = if config.parallel {
        alpha
            .axis_iter(Axis(0))
            .into_par_iter()
            .zip(returns.axis_iter(Axis(0)))
            .enumerate()
            .map(|(day, (a, r))| daily_ic(a, r, day, config))
            .collect()
    } else {
        alpha
            .axis_iter(Axis(0))
            .zip(returns.axis_iter(Axis(0)))
            .enumerate()
            .map(|(day, (a, r))| daily_ic(a, r, day, config))
            .collect()
    };

    terms.into_iter().collect::<Result<Vec<f64>>>().map(Array1::from)
}

/// Calculate the correlation between one day's alpha and returns.
///
/// # Errors
///
/// * [`IcError::ShapeMismatch`] if the rows differ in length
/// * [`IcError::InsufficientSamples`] with fewer than `config.min_assets` assets
/// * [`IcError::NonFiniteValue`] if either row holds a NaN or infinity
/// * [`IcError::DegenerateVariance`] if either row is constant, or its standard
///   deviation relative to its largest absolute value is at most
///   `config.std_threshold`
/// * [`IcError::NonFiniteResult`] if the correlation is not finite
pub fn daily_ic(
    alpha: ArrayView1<'_, f64>,
    returns: ArrayView1<'_, f64>,
    day: usize,
    config: &IcConfig,
) -> Result<f64> {
    let n = alpha.len();
    if n != returns.len() {
        return Err(IcError::ShapeMismatch {
            alpha: (1, n),
            returns: (1, returns.len()),
        });
    }

    let required = config.min_assets.max(2);
    let insufficient = IcError::InsufficientSamples {
        day,
        samples: n,
        required,
    };
    if n < required {
        return Err(insufficient);
    }

    if let Some(asset) = first_non_finite(alpha) {
        return Err(IcError::NonFiniteValue {
            day,
            asset,
            series: Series::Alpha,
        });
    }
    if let Some(asset) = first_non_finite(returns) {
        return Err(IcError::NonFiniteValue {
            day,
            asset,
            series: Series::Returns,
        });
    }

    let (scaled_alpha, std_alpha) = scaled_row(alpha, day, Series::Alpha, config)?;
    let (scaled_returns, std_returns) = scaled_row(returns, day, Series::Returns, config)?;

    let cov =
        sample_covariance(scaled_alpha.view(), scaled_returns.view()).ok_or(insufficient)?;
    let ic = cov / (std_alpha * std_returns);
    if !ic.is_finite() {
        return Err(IcError::NonFiniteResult { day });
    }
    trace!(day, ic, "daily IC");
    Ok(ic)
}

/// Rescale a row into `[-1, 1]` and return it with its standard deviation.
///
/// Correlation is scale-free, so working on the rescaled row changes nothing
/// but keeps the sums of squares finite for huge inputs and makes
/// `std_threshold` relative to the row's magnitude.
fn scaled_row(
    values: ArrayView1<'_, f64>,
    day: usize,
    series: Series,
    config: &IcConfig,
) -> Result<(Array1<f64>, f64)> {
    let degenerate = || IcError::DegenerateVariance { day, series };
    if is_constant(values) {
        return Err(degenerate());
    }
    let scaled = rescale_max_abs(values).ok_or_else(degenerate)?;
    let std = sample_std(scaled.view()).ok_or_else(degenerate)?;
    if std <= config.std_threshold {
        return Err(degenerate());
    }
    Ok((scaled, std))
}

fn check_shapes(alpha: &ArrayView2<'_, f64>, returns: &ArrayView2<'_, f64>) -> Result<()> {
    let (a, r) = (Shape::of(alpha), Shape::of(returns));
    if a != r {
        return Err(IcError::ShapeMismatch {
            alpha: a.as_tuple(),
            returns: r.as_tuple(),
        });
    }
    Ok(())
}
