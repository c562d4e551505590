use async_trait::async_trait;

use crate::{api::precios::Response, core::series::PriceSeries, error::Error, prelude::*};

/// Source of the daily prices payload.
#[async_trait]
pub trait PriceProvider: Sync {
    async fn get_response(&self) -> Result<Response>;

    /// Fetch the payload and validate it into a series.
    #[instrument(skip_all)]
    async fn get_series(&self) -> Result<PriceSeries, Error> {
        let response = self.get_response().await.map_err(Error::FetchFailure)?;
        let series = PriceSeries::try_from(response.into_points())?;
        debug!(len = series.len(), date = %series.date(), "validated");
        Ok(series)
    }
}
