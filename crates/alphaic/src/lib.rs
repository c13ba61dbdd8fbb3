#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/alphaic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Crate Organization
//!
//! - [`traits`] - Errors, matrix types, the [`AlphaValue`] abstraction, statistics
//! - [`eval`] - IC computation, metric driver, summary metrics
//!
//! ## Architecture
//!
//! 1. An [`AlphaValue`] exposes a `(days, assets)` alpha matrix
//! 2. A [`MetricDriver`] pairs it with returns from a [`ReturnsSource`]
//! 3. [`compute_ic`] reduces each day to a correlation and averages them

/// Version information for the alphaic crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types for alphaic.
pub mod traits {
    pub use alphaic_traits::*;
}

pub use alphaic_traits::{
    AlphaMatrix, AlphaValue, IcError, NamedAlpha, Result, ReturnsMatrix, Series, Shape,
};

// ============================================================================
// Evaluation
// ============================================================================

/// IC evaluation tools.
///
/// # Example
///
/// ```
/// use alphaic::eval::{SyntheticReturns, MetricDriver};
/// use alphaic::eval::ReturnsSource;
///
/// let alpha = SyntheticReturns::new(1).returns(50, 40).unwrap();
/// let driver = MetricDriver::new(SyntheticReturns::new(2));
/// let ic = driver.evaluate(alpha.view()).unwrap();
/// assert!(ic.abs() < 0.1);
/// ```
pub mod eval {
    pub use alphaic_eval::*;
}

pub use alphaic_eval::{
    FixedReturns, IcConfig, IcSummary, MetricDriver, MetricsConfig, ReturnsSource,
    SyntheticReturns, compute_ic, compute_ic_with, compute_metric, fast_evaluate,
    fast_evaluate_with, ic_series,
};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_compose() {
        let alpha = NamedAlpha::new("x", array![[1.0, 2.0, 3.0], [1.0, 2.0, 3.0]]);
        let returns = array![[2.0, 4.0, 6.0], [6.0, 4.0, 2.0]];

        let ic = fast_evaluate(&alpha, returns.view()).unwrap();
        assert!(ic.abs() < 1e-12);

        let series = ic_series(alpha.value(), returns.view(), &IcConfig::default()).unwrap();
        let summary = IcSummary::from_series(series.view(), &MetricsConfig::default()).unwrap();
        assert_eq!(summary.n_obs, 2);
        assert!((summary.hit_rate - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_errors_are_reexported() {
        let alpha = array![[1.0]];
        let err = compute_metric(alpha.view(), alpha.view()).unwrap_err();
        assert!(matches!(err, IcError::InsufficientSamples { .. }));
    }
}
