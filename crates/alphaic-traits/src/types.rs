//! Matrix types used throughout the alphaic crates.
//!
//! Both inputs to the IC computation are dense `(days, assets)` matrices of
//! `f64`. Row `d` holds the cross-section of every asset on day `d`.

use ndarray::{Array2, ArrayView2};

/// Predicted per-asset signal scores, shape `(days, assets)`.
pub type AlphaMatrix = Array2<f64>;

/// Realized per-asset returns, shape `(days, assets)`.
pub type ReturnsMatrix = Array2<f64>;

/// Shape of a `(days, assets)` matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub days: usize,
    /// Number of columns.
    pub assets: usize,
}

impl Shape {
    /// Creates a shape from a day and asset count.
    pub const fn new(days: usize, assets: usize) -> Self {
        Self { days, assets }
    }

    /// Reads the shape of a matrix view.
    pub fn of(matrix: &ArrayView2<'_, f64>) -> Self {
        let (days, assets) = matrix.dim();
        Self { days, assets }
    }

    /// Returns the shape as a `(days, assets)` tuple.
    pub const fn as_tuple(self) -> (usize, usize) {
        (self.days, self.assets)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((days, assets): (usize, usize)) -> Self {
        Self::new(days, assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shape_of_matrix() {
        let m: AlphaMatrix = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let shape = Shape::of(&m.view());
        assert_eq!(shape, Shape::new(2, 3));
        assert_eq!(shape.as_tuple(), (2, 3));
    }

    #[test]
    fn test_shape_from_tuple() {
        let shape: Shape = (5, 7).into();
        assert_eq!(shape.days, 5);
        assert_eq!(shape.assets, 7);
    }
}
