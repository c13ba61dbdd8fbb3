//! Summary metrics over a per-day IC series.
//!
//! - Mean IC: the headline Information Coefficient
//! - Information Ratio (IR): mean IC / std IC
//! - Hit rate: fraction of days with positive IC

use alphaic_traits::{IcError, Result, stats::MIN_STD_THRESHOLD};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Configuration for summary metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Minimum number of observations required for metric calculation
    pub min_observations: usize,
    /// Whether to annualize the IR
    pub annualize: bool,
    /// Number of trading days per year for annualization
    pub trading_days_per_year: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            min_observations: 2,
            annualize: false,
            trading_days_per_year: 252,
        }
    }
}

/// Summary statistics of an IC series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcSummary {
    /// Mean IC
    pub mean_ic: f64,
    /// Sample standard deviation of IC
    pub std_ic: f64,
    /// Information Ratio, `None` when the IC never varies
    pub ir: Option<f64>,
    /// Fraction of days with positive IC
    pub hit_rate: f64,
    /// Number of observations
    pub n_obs: usize,
}

impl IcSummary {
    /// Summarize an IC series.
    ///
    /// # Errors
    ///
    /// Returns [`IcError::InsufficientObservations`] if the series is shorter than
    /// `config.min_observations` after dropping non-finite values. Fewer than
    /// 2 values are never accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use alphaic_eval::{IcSummary, MetricsConfig};
    /// use ndarray::array;
    ///
    /// let ics = array![0.05, 0.03, 0.07, -0.01, 0.06];
    /// let summary = IcSummary::from_series(ics.view(), &MetricsConfig::default()).unwrap();
    /// assert_eq!(summary.n_obs, 5);
    /// assert!((summary.hit_rate - 0.8).abs() < 1e-12);
    /// ```
    pub fn from_series(ic_series: ArrayView1<'_, f64>, config: &MetricsConfig) -> Result<Self> {
        // Filter out NaN values
        let valid: Array1<f64> = ic_series.iter().copied().filter(|x| x.is_finite()).collect();

        let n_obs = valid.len();
        let required = config.min_observations.max(2);
        if n_obs < required {
            return Err(IcError::InsufficientObservations {
                observations: n_obs,
                required,
            });
        }

        let mean_ic = valid.sum() / n_obs as f64;
        let std_ic = valid.std(1.0);

        let ir = (std_ic > MIN_STD_THRESHOLD).then(|| {
            let ir = mean_ic / std_ic;
            if config.annualize {
                ir * (config.trading_days_per_year as f64).sqrt()
            } else {
                ir
            }
        });

        let hits = valid.iter().filter(|&&ic| ic > 0.0).count();
        let hit_rate = hits as f64 / n_obs as f64;

        Ok(Self {
            mean_ic,
            std_ic,
            ir,
            hit_rate,
            n_obs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_summary_basic() {
        let ics = array![0.1, 0.2, 0.3];
        let summary = IcSummary::from_series(ics.view(), &MetricsConfig::default()).unwrap();
        assert_abs_diff_eq!(summary.mean_ic, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.std_ic, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.ir.unwrap(), 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(summary.hit_rate, 1.0);
        assert_eq!(summary.n_obs, 3);
    }

    #[test]
    fn test_summary_annualized() {
        let ics = array![0.1, 0.2, 0.3];
        let config = MetricsConfig {
            annualize: true,
            ..MetricsConfig::default()
        };
        let summary = IcSummary::from_series(ics.view(), &config).unwrap();
        assert_abs_diff_eq!(summary.ir.unwrap(), 2.0 * 252f64.sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn test_summary_constant_series_has_no_ir() {
        let ics = array![0.05, 0.05, 0.05, 0.05];
        let summary = IcSummary::from_series(ics.view(), &MetricsConfig::default()).unwrap();
        assert!(summary.ir.is_none());
        assert_abs_diff_eq!(summary.mean_ic, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_too_short() {
        let ics = array![0.05, 0.02];
        let config = MetricsConfig {
            min_observations: 20,
            ..MetricsConfig::default()
        };
        let err = IcSummary::from_series(ics.view(), &config).unwrap_err();
        assert_eq!(
            err,
            IcError::InsufficientObservations {
                observations: 2,
                required: 20,
            }
        );
        assert!(!err.to_string().contains("day"));
    }

    #[test]
    fn test_summary_skips_nan() {
        let ics = array![0.05, f64::NAN, 0.01];
        let summary = IcSummary::from_series(ics.view(), &MetricsConfig::default()).unwrap();
        assert_eq!(summary.n_obs, 2);
        assert_abs_diff_eq!(summary.mean_ic, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_serializes() {
        let ics = array![0.1, -0.1];
        let summary = IcSummary::from_series(ics.view(), &MetricsConfig::default()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["n_obs"], 2);
        assert_eq!(json["hit_rate"], 0.5);
    }
}
