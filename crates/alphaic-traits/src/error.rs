//! Error types for IC evaluation.
//!
//! Every condition that would make the Information Coefficient undefined is
//! reported as an explicit error instead of a NaN or infinite result, since
//! the metric is used to rank and filter candidate signals.

use std::fmt;
use thiserror::Error;

/// Which of the two input matrices a per-day failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// The alpha (signal) matrix.
    Alpha,
    /// The realized returns matrix.
    Returns,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alpha => f.write_str("alpha"),
            Self::Returns => f.write_str("returns"),
        }
    }
}

/// The main error type for IC evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IcError {
    /// Alpha and returns matrices differ in shape.
    #[error("Shape mismatch: alpha is {}x{}, returns is {}x{}", alpha.0, alpha.1, returns.0, returns.1)]
    ShapeMismatch {
        /// Shape of the alpha matrix as (days, assets).
        alpha: (usize, usize),
        /// Shape of the returns matrix as (days, assets).
        returns: (usize, usize),
    },

    /// The supplied day count disagrees with the number of matrix rows.
    #[error("Day count mismatch: {num_days} days requested but matrices have {rows} rows")]
    DayCountMismatch {
        /// Day count passed by the caller.
        num_days: usize,
        /// Number of rows in the matrices.
        rows: usize,
    },

    /// Zero days supplied.
    #[error("No data: at least one day is required")]
    NoData,

    /// Too few assets on a day for covariance and standard deviation.
    #[error("Insufficient samples on day {day}: {samples} assets, at least {required} required")]
    InsufficientSamples {
        /// Day (row) index.
        day: usize,
        /// Number of assets available.
        samples: usize,
        /// Minimum number of assets required.
        required: usize,
    },

    /// A day's vector is constant, so its standard deviation is zero.
    #[error("Degenerate variance on day {day}: {series} values are constant")]
    DegenerateVariance {
        /// Day (row) index.
        day: usize,
        /// Matrix whose row has no variance.
        series: Series,
    },

    /// A NaN or infinite value was found in an input matrix.
    #[error("Non-finite {series} value on day {day}, asset {asset}")]
    NonFiniteValue {
        /// Day (row) index.
        day: usize,
        /// Asset (column) index.
        asset: usize,
        /// Matrix containing the value.
        series: Series,
    },

    /// A day's correlation could not be represented as a finite number.
    #[error("Non-finite IC on day {day}")]
    NonFiniteResult {
        /// Day (row) index.
        day: usize,
    },

    /// Too few IC values to summarize.
    #[error("Insufficient observations: {observations} IC values, at least {required} required")]
    InsufficientObservations {
        /// Number of usable IC values.
        observations: usize,
        /// Minimum number of values required.
        required: usize,
    },

    /// Configuration values are out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for IC evaluation.
///
/// This is a convenience type that uses [`IcError`] as the error type.
pub type Result<T> = std::result::Result<T, IcError>;
