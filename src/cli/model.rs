use crate::{cli::source::SourceArgs, prelude::*};

#[instrument(skip_all)]
pub async fn model(args: &SourceArgs) -> Result {
    let dashboard = args.load_dashboard().await?;
    println!("{}", serde_json::to_string_pretty(&dashboard.chart)?);
    Ok(())
}
