//! Evaluation entry points for alpha values.
//!
//! Thin adapters that pull the matrix out of an [`AlphaValue`] and hand it to
//! the metric driver.

use crate::metric::{MetricDriver, ReturnsSource, compute_metric};
use alphaic_traits::{AlphaValue, Result};
use ndarray::ArrayView2;
use tracing::debug;

/// Compute the IC of an alpha value against caller-supplied returns.
///
/// # Errors
///
/// Propagates every error of [`compute_metric`].
///
/// # Example
///
/// ```
/// use alphaic_eval::fast_evaluate;
/// use alphaic_traits::NamedAlpha;
/// use ndarray::array;
///
/// let alpha = NamedAlpha::new("reversal", array![[1.0, 2.0, 3.0]]);
/// let returns = array![[3.0, 2.0, 1.0]];
/// let ic = fast_evaluate(&alpha, returns.view()).unwrap();
/// assert!((ic + 1.0).abs() < 1e-12);
/// ```
pub fn fast_evaluate<A>(alpha: &A, returns: ArrayView2<'_, f64>) -> Result<f64>
where
    A: AlphaValue + ?Sized,
{
    debug!(alpha = alpha.name(), "fast evaluate");
    compute_metric(alpha.value(), returns)
}

/// Compute the IC of an alpha value with a metric driver.
///
/// # Errors
///
/// Propagates every error of [`MetricDriver::evaluate`].
pub fn fast_evaluate_with<A, S>(driver: &MetricDriver<S>, alpha: &A) -> Result<f64>
where
    A: AlphaValue + ?Sized,
    S: ReturnsSource,
{
    debug!(alpha = alpha.name(), "fast evaluate with driver");
    driver.evaluate(alpha.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{FixedReturns, SyntheticReturns};
    use alphaic_traits::{IcError, NamedAlpha, Series};
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};

    #[test]
    fn test_fast_evaluate_named() {
        let alpha = NamedAlpha::new("a", array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let returns = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let ic = fast_evaluate(&alpha, returns.view()).unwrap();
        assert_abs_diff_eq!(ic, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fast_evaluate_bare_matrix() {
        let alpha: Array2<f64> = array![[1.0, 2.0, 3.0]];
        let returns = array![[3.0, 2.0, 1.0]];
        let ic = fast_evaluate(&alpha, returns.view()).unwrap();
        assert_abs_diff_eq!(ic, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fast_evaluate_trait_object() {
        let alpha: Box<dyn AlphaValue> = Box::new(NamedAlpha::new("boxed", array![[1.0, 2.0]]));
        let returns = array![[2.0, 4.0]];
        let ic = fast_evaluate(alpha.as_ref(), returns.view()).unwrap();
        assert_abs_diff_eq!(ic, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fast_evaluate_propagates_errors() {
        let alpha = NamedAlpha::new("flat", array![[1.0, 1.0, 1.0]]);
        let returns = array![[1.0, 2.0, 3.0]];
        let err = fast_evaluate(&alpha, returns.view()).unwrap_err();
        assert_eq!(
            err,
            IcError::DegenerateVariance {
                day: 0,
                series: Series::Alpha,
            }
        );
    }

    #[test]
    fn test_fast_evaluate_with_driver() {
        let alpha = NamedAlpha::new("a", array![[1.0, 2.0, 3.0]]);
        let driver = MetricDriver::new(FixedReturns::new(array![[0.1, 0.2, 0.3]]));
        let ic = fast_evaluate_with(&driver, &alpha).unwrap();
        assert_abs_diff_eq!(ic, 1.0, epsilon = 1e-12);

        let driver = MetricDriver::new(SyntheticReturns::new(9));
        let ic = fast_evaluate_with(&driver, &alpha).unwrap();
        assert!((-1.0..=1.0).contains(&ic));
    }
}
