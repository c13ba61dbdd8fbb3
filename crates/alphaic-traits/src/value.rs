//! Alpha value abstraction.
//!
//! An alpha expression evaluates to a named `(days, assets)` matrix. The IC
//! machinery never looks inside the expression; it only needs read access to
//! the matrix, which is what [`AlphaValue`] provides.

use crate::types::AlphaMatrix;
use ndarray::ArrayView2;

/// A container exposing an alpha matrix.
///
/// Implement this for whatever type your alpha expressions evaluate to so it
/// can be passed straight to the evaluation functions.
///
/// # Example
///
/// ```
/// use alphaic_traits::AlphaValue;
/// use ndarray::{Array2, ArrayView2};
///
/// struct Momentum {
///     scores: Array2<f64>,
/// }
///
/// impl AlphaValue for Momentum {
///     fn value(&self) -> ArrayView2<'_, f64> {
///         self.scores.view()
///     }
///
///     fn name(&self) -> &str {
///         "momentum_20d"
///     }
/// }
///
/// let alpha = Momentum { scores: Array2::zeros((3, 4)) };
/// assert_eq!(alpha.value().dim(), (3, 4));
/// ```
pub trait AlphaValue {
    /// Returns a view of the `(days, assets)` alpha matrix.
    fn value(&self) -> ArrayView2<'_, f64>;

    /// Returns a name for the alpha, used in logs and reports.
    fn name(&self) -> &str {
        "alpha"
    }
}

/// An alpha matrix paired with a name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAlpha {
    name: String,
    value: AlphaMatrix,
}

impl NamedAlpha {
    /// Creates a named alpha from a matrix.
    pub fn new(name: impl Into<String>, value: AlphaMatrix) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Consumes the wrapper and returns the matrix.
    pub fn into_inner(self) -> AlphaMatrix {
        self.value
    }
}

impl AlphaValue for NamedAlpha {
    fn value(&self) -> ArrayView2<'_, f64> {
        self.value.view()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl AlphaValue for AlphaMatrix {
    fn value(&self) -> ArrayView2<'_, f64> {
        self.view()
    }
}
