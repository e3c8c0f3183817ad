//! Point-set loading for the `run` subcommand.
//!
//! - `.csv`: integer columns `x` and `y` (header required), read with polars.
//! - `.json`: array of `{"x": .., "y": ..}` objects.

use anyhow::{anyhow, bail, Context, Result};
use grahamscan::geom2::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let points = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => bail!("unsupported input {} (expected .csv or .json)", path.display()),
    };
    tracing::info!(path = %path.display(), points = points.len(), "input_loaded");
    Ok(points)
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = integer_column(&df, "x", path)?;
    let ys = integer_column(&df, "y", path)?;
    xs.i64()?
        .into_iter()
        .zip(ys.i64()?.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate in {}", path.display())),
        })
        .collect()
}

/// Column `name` as `Int64`. Non-integer columns (floats, text) are an error
/// instead of being truncated; out-of-range unsigned values fail the cast.
fn integer_column(df: &DataFrame, name: &str, path: &Path) -> Result<Series> {
    let col = df.column(name)?;
    let dtype = col.dtype();
    if !dtype.is_integer() {
        bail!(
            "column {name} in {} has type {dtype}, expected integers",
            path.display()
        );
    }
    Ok(col.strict_cast(&DataType::Int64)?)
}

fn load_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}
