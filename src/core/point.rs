use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;

use crate::quantity::rate::MegawattHourRate;

/// Hourly price as published by the API.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, derive_more::Constructor)]
pub struct PricePoint {
    /// Start of the hour, in the wall-clock time it was published with.
    pub timestamp: DateTime<FixedOffset>,

    pub price: MegawattHourRate,
}

impl PricePoint {
    /// Wall-clock hour of the timestamp, the `HH` of `YYYY-MM-DDTHH:…`.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}
