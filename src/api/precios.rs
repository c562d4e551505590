//! Daily electricity prices backend: `GET <base-url>/api/precios`.

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_with::serde_as;

use crate::{
    api::{client, provider::PriceProvider},
    core::point::PricePoint,
    prelude::*,
    quantity::rate::MegawattHourRate,
};

pub const DEFAULT_BASE_URL: &str = "https://app-tarifa-luz-back.vercel.app";

pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    pub fn try_new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let url = base_url.join("api/precios").context("invalid base URL")?;
        Ok(Self { client: client::try_new(timeout)?, url })
    }
}

#[async_trait]
impl PriceProvider for Api {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn get_response(&self) -> Result<Response> {
        info!("fetching…");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .context("failed to call")?
            .error_for_status()
            .context("request failed")?
            .json::<Response>()
            .await
            .context("failed to deserialize the response")?;
        info!(n_prices = response.hourly_prices.len(), "fetched");
        Ok(response)
    }
}

#[derive(Deserialize)]
pub struct Response {
    #[serde(rename = "preciosHoras")]
    hourly_prices: Vec<HourlyPrice>,
}

impl Response {
    pub fn into_points(self) -> Vec<PricePoint> {
        self.hourly_prices
            .into_iter()
            .map(|hourly_price| PricePoint::new(hourly_price.timestamp.0, hourly_price.price))
            .collect()
    }
}

#[serde_as]
#[derive(Deserialize)]
struct HourlyPrice {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(rename = "datetime")]
    timestamp: Timestamp,

    /// Price per megawatt-hour.
    #[serde(rename = "precio")]
    price: MegawattHourRate,
}

/// ISO 8601 timestamp, with or without the UTC offset.
///
/// A timestamp without an offset keeps its wall-clock time and gets `+00:00`.
struct Timestamp(DateTime<FixedOffset>);

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s)
            .or_else(|_| NaiveDateTime::from_str(s).map(|time| time.and_utc().fixed_offset()))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
                    .map(|time| time.and_utc().fixed_offset())
            })
            .map(Self)
    }
}
