use crate::{
    cli::source::SourceArgs,
    prelude::*,
    tables::{build_prices_table, build_summary_table},
};

#[instrument(skip_all)]
pub async fn summary(args: &SourceArgs) -> Result {
    let dashboard = args.load_dashboard().await?;
    info!(
        mean = %dashboard.statistics.mean,
        max = %dashboard.statistics.max,
        min = %dashboard.statistics.min,
        "statistics",
    );
    println!("{}", build_summary_table(&dashboard));
    println!("{}", build_prices_table(&dashboard.chart));
    Ok(())
}
