use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build a default client.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().user_agent("tarifa").timeout(timeout).build()?)
}
