use std::{fs, path::PathBuf};

use clap::Parser;

use crate::{cli::source::SourceArgs, prelude::*, render::render_svg};

#[derive(Parser)]
pub struct ChartArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Output SVG file.
    #[clap(long, short, env = "CHART_OUTPUT", default_value = "prices.svg")]
    pub output: PathBuf,
}

#[instrument(skip_all, fields(output = ?args.output))]
pub async fn chart(args: &ChartArgs) -> Result {
    let dashboard = args.source.load_dashboard().await?;
    let svg = render_svg(&dashboard.chart)?;
    fs::write(&args.output, svg).context("failed to write the chart")?;
    info!(highlighted_hour = dashboard.chart.highlight.hour, "written");
    Ok(())
}
