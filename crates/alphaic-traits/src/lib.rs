#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/alphaic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for Information Coefficient evaluation.
//!
//! This crate provides the foundational pieces shared across the workspace:
//! the error taxonomy, the matrix types, the alpha value abstraction, and
//! the sample statistics every IC term is built from.

/// The version of the alphaic-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod stats;
pub mod types;
pub mod value;

// Re-exports
pub use error::{IcError, Result, Series};
pub use types::{AlphaMatrix, ReturnsMatrix, Shape};
pub use value::{AlphaValue, NamedAlpha};
