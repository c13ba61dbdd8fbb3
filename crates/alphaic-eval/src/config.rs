//! Configuration for IC computation.

use alphaic_traits::{IcError, Result, stats::MIN_STD_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Configuration for IC computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcConfig {
    /// Minimum number of assets per day (never below 2)
    pub min_assets: usize,
    /// Standard deviations at or below this value count as zero variance,
    /// measured on rows divided by their largest absolute value
    pub std_threshold: f64,
    /// Evaluate days in parallel
    pub parallel: bool,
}

impl Default for IcConfig {
    fn default() -> Self {
        Self {
            min_assets: 2,
            std_threshold: MIN_STD_THRESHOLD,
            parallel: false,
        }
    }
}

impl IcConfig {
    /// Checks that the configuration values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`IcError::InvalidConfig`] if `min_assets` is below 2 or
    /// `std_threshold` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.min_assets < 2 {
            return Err(IcError::InvalidConfig(format!(
                "min_assets must be at least 2, got {}",
                self.min_assets
            )));
        }
        if !self.std_threshold.is_finite() || self.std_threshold < 0.0 {
            return Err(IcError::InvalidConfig(format!(
                "std_threshold must be a non-negative finite number, got {}",
                self.std_threshold
            )));
        }
        Ok(())
    }
}
