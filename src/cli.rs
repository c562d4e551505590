mod chart;
mod model;
mod source;
mod summary;

use clap::{Parser, Subcommand};

pub use self::{chart::chart, model::model, summary::summary};
use crate::cli::{chart::ChartArgs, source::SourceArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print today's price statistics and the hourly prices.
    #[clap(name = "summary")]
    Summary(SourceArgs),

    /// Draw today's prices into an SVG chart.
    #[clap(name = "chart")]
    Chart(ChartArgs),

    /// Print the chart model as JSON.
    #[clap(name = "model")]
    Model(SourceArgs),
}
