use std::{fs, path::PathBuf};

use async_trait::async_trait;

use crate::{
    api::{precios::Response, provider::PriceProvider},
    prelude::*,
};

/// Previously saved response of the prices API.
pub struct Snapshot(pub PathBuf);

#[async_trait]
impl PriceProvider for Snapshot {
    #[instrument(skip_all, fields(path = ?self.0))]
    async fn get_response(&self) -> Result<Response> {
        info!("reading…");
        let contents = fs::read_to_string(&self.0).context("failed to read the snapshot")?;
        serde_json::from_str(&contents).context("failed to deserialize the snapshot")
    }
}
