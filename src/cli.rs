use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::args::{ReturnsArgs, StackedArgs};
use crate::import;
use crate::pipeline;
use crate::render;

pub fn main_returns(args: ReturnsArgs) -> Result<()> {
    log::info!("Reading source data...");
    let records = import::load_records(&args.source)
        .with_context(|| format!("Failed to read {}", args.source.display()))?;
    log::info!("Reading source data...done ({} records)", records.len());

    let chart = pipeline::returns_chart(&records, args.expected_annual_return_rate)?;

    log::info!("Plotting data...");
    let output = output_path(&args.source, "returns");
    render::render_svg(&chart, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Plotting data...done");

    println!("Wrote {}", output.display());
    Ok(())
}

pub fn main_stacked(args: StackedArgs) -> Result<()> {
    log::info!("Reading source data...");
    let series = import::load_series(&args.sources)
        .with_context(|| format!("Failed to read {}", args.sources.display()))?;
    log::info!("Reading source data...done ({} series)", series.len());

    let chart = pipeline::stacked_chart(&series, args.start_date)?;

    log::info!("Plotting data...");
    let output = output_path(&args.sources, "stacked");
    render::render_svg(&chart, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Plotting data...done");

    println!("Wrote {}", output.display());
    Ok(())
}

/// `<input stem>-<suffix>.svg` in the working directory
fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("chart");
    PathBuf::from(format!("{stem}-{suffix}.svg"))
}
