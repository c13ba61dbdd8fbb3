//! IC command implementation.

use crate::cmd::OutputFormat;
use crate::data;
use alphaic_eval::{IcConfig, IcSummary, MetricsConfig, ic_series};
use alphaic_traits::{AlphaValue, IcError};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Result of scoring one alpha file.
#[derive(Debug, Serialize)]
pub(crate) struct IcReport {
    pub(crate) alpha: String,
    pub(crate) days: usize,
    pub(crate) assets: usize,
    pub(crate) ic: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) series: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<IcSummary>,
}

/// Compute the IC of an alpha file against a returns file.
pub(crate) fn run_ic(
    alpha_path: &Path,
    returns_path: &Path,
    config_path: Option<&Path>,
    parallel: bool,
    show_series: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut config = data::load_config(config_path)?;
    config.parallel |= parallel;

    let alpha = data::load_matrix(alpha_path)?;
    let returns = data::load_matrix(returns_path)?.into_inner();
    info!(alpha = alpha.name(), shape = ?alpha.value().dim(), "loaded inputs");

    let report = build_report(&alpha, returns.view(), &config, show_series)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

/// Score an alpha and assemble the report.
pub(crate) fn build_report<A: AlphaValue>(
    alpha: &A,
    returns: ndarray::ArrayView2<'_, f64>,
    config: &IcConfig,
    show_series: bool,
) -> Result<IcReport> {
    let (days, assets) = alpha.value().dim();
    let daily = ic_series(alpha.value(), returns, config)?;
    let ic = daily.mean().ok_or(IcError::NoData)?;

    let (series, summary) = if show_series {
        let summary = match IcSummary::from_series(daily.view(), &MetricsConfig::default()) {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Skipping summary: {e}");
                None
            }
        };
        (Some(daily.to_vec()), summary)
    } else {
        (None, None)
    };

    Ok(IcReport {
        alpha: alpha.name().to_string(),
        days,
        assets,
        ic,
        series,
        summary,
    })
}

fn print_report(report: &IcReport) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Information Coefficient                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Alpha:    {}", report.alpha);
    println!("Days:     {}", report.days);
    println!("Assets:   {}", report.assets);
    println!("IC:       {:.6}", report.ic);

    if let Some(ref series) = report.series {
        println!("\nDaily IC:");
        println!("{}", "-".repeat(24));
        for (day, ic) in series.iter().enumerate() {
            println!("  {:>6}  {:>+.6}", day, ic);
        }
    }

    if let Some(ref summary) = report.summary {
        println!("\nSummary:");
        println!("{}", "-".repeat(24));
        println!("  Mean IC:   {:.6}", summary.mean_ic);
        println!("  Std IC:    {:.6}", summary.std_ic);
        match summary.ir {
            Some(ir) => println!("  IR:        {:.3}", ir),
            None => println!("  IR:        n/a"),
        }
        println!("  Hit rate:  {:.1}%", summary.hit_rate * 100.0);
    }
    println!();
}
