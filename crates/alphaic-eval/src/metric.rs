//! Metric driver.
//!
//! The driver turns an alpha matrix into its IC. Returns are never invented
//! implicitly: they come either from the caller ([`compute_metric`]) or from
//! an explicit [`ReturnsSource`] held by a [`MetricDriver`].

use crate::{
    config::IcConfig,
    ic::{compute_ic, compute_ic_with, ic_series},
};
use alphaic_traits::{IcError, Result, ReturnsMatrix};
use ndarray::{Array1, Array2, ArrayView2};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

/// Compute the IC of an alpha against caller-supplied returns.
///
/// The day count is taken from the number of alpha rows.
///
/// # Errors
///
/// Propagates every error of [`compute_ic`].
pub fn compute_metric(alpha: ArrayView2<'_, f64>, returns: ArrayView2<'_, f64>) -> Result<f64> {
    let num_days = alpha.nrows();
    compute_ic(alpha, returns, num_days)
}

/// A provider of realized returns for a given matrix shape.
pub trait ReturnsSource {
    /// Returns a `(days, assets)` returns matrix.
    ///
    /// # Errors
    ///
    /// Returns [`IcError::ShapeMismatch`] if the source cannot provide a
    /// matrix of the requested shape.
    fn returns(&self, days: usize, assets: usize) -> Result<ReturnsMatrix>;
}

/// Returns supplied up front by the caller.
#[derive(Debug, Clone)]
pub struct FixedReturns {
    returns: ReturnsMatrix,
}

impl FixedReturns {
    /// Wraps a returns matrix.
    pub const fn new(returns: ReturnsMatrix) -> Self {
        Self { returns }
    }
}

impl ReturnsSource for FixedReturns {
    fn returns(&self, days: usize, assets: usize) -> Result<ReturnsMatrix> {
        if self.returns.dim() != (days, assets) {
            return Err(IcError::ShapeMismatch {
                alpha: (days, assets),
                returns: self.returns.dim(),
            });
        }
        Ok(self.returns.clone())
    }
}

/// Independent standard-normal returns drawn from a seeded generator.
///
/// Useful for demonstrations and as a null benchmark: an alpha scored
/// against these returns should have an IC near zero. The same seed and
/// shape always produce the same matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticReturns {
    /// Seed for the random number generator.
    pub seed: u64,
}

impl SyntheticReturns {
    /// Creates a source with the given seed.
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ReturnsSource for SyntheticReturns {
    fn returns(&self, days: usize, assets: usize) -> Result<ReturnsMatrix> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(Array2::from_shape_simple_fn((days, assets), || {
            Distribution::<f64>::sample(&StandardNormal, &mut rng)
        }))
    }
}

/// Scores alphas against returns from a fixed source.
#[derive(Debug, Clone)]
pub struct MetricDriver<S> {
    source: S,
    config: IcConfig,
}

impl<S: ReturnsSource> MetricDriver<S> {
    /// Creates a driver with the default IC configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: IcConfig::default(),
        }
    }

    /// Replaces the IC configuration.
    pub fn with_config(mut self, config: IcConfig) -> Self {
        self.config = config;
        self
    }

    /// The IC configuration in use.
    pub const fn config(&self) -> &IcConfig {
        &self.config
    }

    /// Compute the IC of `alpha` against this driver's returns.
    ///
    /// # Errors
    ///
    /// Propagates errors from the returns source and from [`compute_ic_with`].
    pub fn evaluate(&self, alpha: ArrayView2<'_, f64>) -> Result<f64> {
        let (days, assets) = alpha.dim();
        let returns = self.source.returns(days, assets)?;
        debug!(days, assets, "evaluating alpha");
        compute_ic_with(alpha, returns.view(), days, &self.config)
    }

    /// Compute the per-day IC series of `alpha` against this driver's returns.
    ///
    /// # Errors
    ///
    /// Propagates errors from the returns source and from [`ic_series`].
    pub fn evaluate_series(&self, alpha: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let (days, assets) = alpha.dim();
        let returns = self.source.returns(days, assets)?;
        ic_series(alpha, returns.view(), &self.config)
    }
}
