//! Information Coefficient evaluation for alpha signals.
//!
//! This crate provides the tools for scoring an alpha against realized returns:
//! - Information Coefficient (IC) calculations, per day and averaged
//! - A metric driver fed by an explicit returns source
//! - Adapters for [`alphaic_traits::AlphaValue`] containers
//! - Summary metrics over an IC series (mean, IR, hit rate)
//!
//! # Example
//!
//! ```
//! use alphaic_eval::{FixedReturns, MetricDriver, compute_ic};
//! use ndarray::array;
//!
//! let alpha = array![[1.0, 2.0, 3.0]];
//! let returns = array![[3.0, 2.0, 1.0]];
//! let ic = compute_ic(alpha.view(), returns.view(), 1).unwrap();
//! assert!((ic + 1.0).abs() < 1e-12);
//!
//! let driver = MetricDriver::new(FixedReturns::new(returns));
//! assert!((driver.evaluate(alpha.view()).unwrap() - ic).abs() < 1e-12);
//! ```

pub mod config;
pub mod evaluate;
pub mod ic;
pub mod metric;
pub mod metrics;

// Re-export main types
pub use config::IcConfig;
pub use evaluate::{fast_evaluate, fast_evaluate_with};
pub use ic::{compute_ic, compute_ic_with, daily_ic, ic_series};
pub use metric::{FixedReturns, MetricDriver, ReturnsSource, SyntheticReturns, compute_metric};
pub use metrics::{IcSummary, MetricsConfig};
