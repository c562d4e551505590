use std::{path::PathBuf, time::Duration};

use chrono::Local;
use clap::Parser;
use reqwest::Url;

use crate::{
    api::{PriceProvider, precios, snapshot::Snapshot},
    core::dashboard::Dashboard,
    prelude::*,
};

#[derive(Parser)]
pub struct SourceArgs {
    /// Prices backend base URL, the prices are fetched from `<base-url>/api/precios`.
    #[clap(long = "base-url", env = "PRICES_BASE_URL", default_value = precios::DEFAULT_BASE_URL)]
    pub base_url: Url,

    #[clap(long = "timeout-secs", env = "PRICES_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    /// Read a saved API response instead of calling the API.
    #[clap(long, env = "PRICES_INPUT")]
    pub input: Option<PathBuf>,
}

impl SourceArgs {
    pub fn provider(&self) -> Result<Box<dyn PriceProvider>> {
        match &self.input {
            Some(path) => Ok(Box::new(Snapshot(path.clone()))),
            None => Ok(Box::new(precios::Api::try_new(
                &self.base_url,
                Duration::from_secs(self.timeout_secs),
            )?)),
        }
    }

    /// Fetch the prices and derive everything to display as of now.
    #[instrument(skip_all)]
    pub async fn load_dashboard(&self) -> Result<Dashboard> {
        let series = self.provider()?.get_series().await?;
        info!(len = series.len(), date = %series.date(), "fetched the prices");
        Ok(Dashboard::new(&series, &Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[tokio::test]
    async fn test_load_dashboard_from_snapshot() -> Result {
        let args = SourceArgs::try_parse_from([
            "summary",
            "--input",
            concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/precios.json"),
        ])?;
        let dashboard = args.load_dashboard().await?;
        assert_eq!(dashboard.chart.bars.len(), 24);
        assert_abs_diff_eq!(dashboard.statistics.min.0, 0.085);
        assert_abs_diff_eq!(dashboard.statistics.max.0, 0.142);
        Ok(())
    }

    #[test]
    fn test_default_base_url() -> Result {
        let args = SourceArgs::try_parse_from(["summary"])?;
        assert_eq!(args.base_url.as_str(), "https://app-tarifa-luz-back.vercel.app/");
        assert_eq!(args.timeout_secs, 10);
        assert!(args.input.is_none());
        Ok(())
    }
}
