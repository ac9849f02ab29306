//! Files handed to plotting and analysis tools.
//!
//! - `vertices.csv`: one row per vertex (combination, rounded coordinates,
//!   objective), written with polars.
//! - `plot.json`: the plot handoff (vertices, constraints, axis bounds).

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use serde_json::{json, Value};
use vertenum::api::{axis_names, fmt_constraint, Enumeration, PlotData, Region};

use crate::provenance::{write_sidecar, Payload};

/// Margin added around the vertex bounding box for plot axes.
const PLOT_MARGIN: f64 = 0.5;

/// Vertex table: `combination`, one column per axis, `value`.
pub fn vertex_frame(run: &Enumeration) -> PolarsResult<DataFrame> {
    let names = axis_names(run.dim);
    let combos: Vec<String> = run
        .vertices
        .iter()
        .map(|v| {
            v.combination
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect();
    let mut columns = Vec::with_capacity(run.dim + 2);
    columns.push(Series::new("combination".into(), combos));
    for (k, name) in names.iter().enumerate() {
        let coords: Vec<f64> = run.vertices.iter().map(|v| v.display[k]).collect();
        columns.push(Series::new(name.as_str().into(), coords));
    }
    let values: Vec<f64> = run.vertices.iter().map(|v| v.display_value).collect();
    columns.push(Series::new("value".into(), values));
    DataFrame::new(columns)
}

pub fn plot_json(plot: &PlotData<'_>) -> Value {
    let names = axis_names(plot.dim);
    let constraints: Vec<Value> = plot
        .constraints
        .iter()
        .map(|c| {
            json!({
                "coefficients": c.a.as_slice(),
                "threshold": c.b,
                "direction": c.dir.symbol(),
                "text": fmt_constraint(c, &names),
            })
        })
        .collect();
    json!({
        "dimension": plot.dim,
        "axes": names,
        "vertices": plot.vertex_coords(),
        "constraints": constraints,
        "bounds": plot.axis_bounds(PLOT_MARGIN),
    })
}

/// Write `vertices.csv` and `plot.json` (plus sidecars) under `dir`.
pub fn write_outputs(
    dir: &Path,
    run: &Enumeration,
    region: &Region,
    payload: &Payload,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let csv_path = dir.join("vertices.csv");
    let mut df = vertex_frame(run)?;
    let mut file =
        File::create(&csv_path).with_context(|| format!("creating {}", csv_path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", csv_path.display()))?;
    write_sidecar(&csv_path, payload)?;

    let plot_path = dir.join("plot.json");
    let plot = plot_json(&PlotData::new(run, region));
    fs::write(&plot_path, serde_json::to_vec_pretty(&plot)?)
        .with_context(|| format!("writing {}", plot_path.display()))?;
    write_sidecar(&plot_path, payload)?;

    tracing::info!(
        dir = %dir.display(),
        rows = df.height(),
        cols = df.width(),
        "outputs written"
    );
    Ok(vec![csv_path, plot_path])
}
