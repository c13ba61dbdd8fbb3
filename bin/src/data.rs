//! Matrix and config loading for the alphaic CLI.
//!
//! Matrix files are JSON, either a bare array of rows or an object with a
//! `name` and a `value` holding the rows.

use alphaic_eval::IcConfig;
use alphaic_traits::NamedAlpha;
use anyhow::{Context, Result, bail};
use ndarray::Array2;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MatrixFile {
    Named { name: String, value: Vec<Vec<f64>> },
    Bare(Vec<Vec<f64>>),
}

/// Parse a JSON matrix document.
///
/// `default_name` is used when the document is a bare array.
pub(crate) fn parse_matrix(text: &str, default_name: &str) -> Result<NamedAlpha> {
    let file: MatrixFile = serde_json::from_str(text).context("Invalid matrix JSON")?;
    let (name, rows) = match file {
        MatrixFile::Named { name, value } => (name, value),
        MatrixFile::Bare(rows) => (default_name.to_string(), rows),
    };
    Ok(NamedAlpha::new(name, rows_to_array(rows)?))
}

/// Load a JSON matrix file, named after the file stem unless it names itself.
pub(crate) fn load_matrix(path: &Path) -> Result<NamedAlpha> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let default_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("alpha");
    parse_matrix(&text, default_name).with_context(|| format!("Failed to load {}", path.display()))
}

/// Load an IC config file, or the defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<IcConfig> {
    let Some(path) = path else {
        return Ok(IcConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: IcConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Convert rows into a `(days, assets)` matrix, rejecting ragged input.
fn rows_to_array(rows: Vec<Vec<f64>>) -> Result<Array2<f64>> {
    let days = rows.len();
    let assets = rows.first().map_or(0, Vec::len);

    if let Some((day, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != assets) {
        bail!(
            "Ragged matrix: row {} has {} values, expected {}",
            day,
            row.len(),
            assets
        );
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((days, assets), flat)?)
}
