use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::{core::point::PricePoint, error::Error};

/// One day of hourly prices, ordered by time.
///
/// A daylight saving fall-back day has 25 hours, hence the limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<PricePoint>);

impl PriceSeries {
    pub const MAX_LEN: usize = 25;

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PricePoint] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Calendar date of the series.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0[0].timestamp.date_naive()
    }

    /// First point within the specified wall-clock hour.
    #[must_use]
    pub fn at_hour(&self, hour: u32) -> Option<&PricePoint> {
        self.0.iter().find(|point| point.hour() == hour)
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = Error;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        let Some(first) = points.first() else {
            return Err(Error::EmptySeries);
        };
        if points.len() > Self::MAX_LEN {
            return Err(Error::InvalidSeries(format!(
                "expected at most {} points, got {}",
                Self::MAX_LEN,
                points.len(),
            )));
        }
        if let Some(point) = points.iter().find(|point| !point.price.0.is_finite()) {
            return Err(Error::InvalidSeries(format!(
                "non-finite price at {}",
                point.timestamp
            )));
        }
        let date = first.timestamp.date_naive();
        if let Some(point) = points.iter().find(|point| point.timestamp.date_naive() != date) {
            return Err(Error::InvalidSeries(format!(
                "{} does not belong to {date}",
                point.timestamp
            )));
        }
        if let Some((previous, next)) = points
            .iter()
            .tuple_windows()
            .find(|(previous, next)| previous.timestamp >= next.timestamp)
        {
            return Err(Error::InvalidSeries(format!(
                "{} is not after {}",
                next.timestamp, previous.timestamp
            )));
        }
        Ok(Self(points))
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub mod tests {
    use chrono::{DateTime, FixedOffset, TimeZone};

    use super::*;
    use crate::quantity::rate::MegawattHourRate;

    pub fn madrid() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    pub fn at(hour: u32) -> DateTime<FixedOffset> {
        madrid().with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    /// Build a series starting at midnight, one point per hour.
    pub fn series_of(prices: &[f64]) -> PriceSeries {
        let points: Vec<_> = prices
            .iter()
            .enumerate()
            .map(|(hour, price)| {
                PricePoint::new(at(u32::try_from(hour).unwrap()), MegawattHourRate(*price))
            })
            .collect();
        PriceSeries::try_from(points).unwrap()
    }

    #[test]
    fn test_empty() {
        assert!(matches!(PriceSeries::try_from(Vec::new()), Err(Error::EmptySeries)));
    }

    #[test]
    fn test_full_day_ok() {
        let series = series_of(&[100.0; 24]);
        assert_eq!(series.len(), 24);
        assert_eq!(series.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(series.at_hour(13).unwrap().timestamp, at(13));
        assert!(series.at_hour(24).is_none());
    }

    #[test]
    fn test_unordered() {
        let points = vec![
            PricePoint::new(at(1), MegawattHourRate(1.0)),
            PricePoint::new(at(0), MegawattHourRate(2.0)),
        ];
        assert!(matches!(PriceSeries::try_from(points), Err(Error::InvalidSeries(_))));
    }

    #[test]
    fn test_duplicate() {
        let points = vec![
            PricePoint::new(at(1), MegawattHourRate(1.0)),
            PricePoint::new(at(1), MegawattHourRate(2.0)),
        ];
        assert!(matches!(PriceSeries::try_from(points), Err(Error::InvalidSeries(_))));
    }

    #[test]
    fn test_fall_back_day_ok() {
        // 02:00 occurs twice: first in summer time, then in winter time.
        let summer = FixedOffset::east_opt(7200).unwrap();
        let points = vec![
            PricePoint::new(summer.with_ymd_and_hms(2024, 10, 27, 2, 0, 0).unwrap(), 1.0.into()),
            PricePoint::new(madrid().with_ymd_and_hms(2024, 10, 27, 2, 0, 0).unwrap(), 2.0.into()),
        ];
        let series = PriceSeries::try_from(points).unwrap();
        assert_eq!(series.at_hour(2).unwrap().price, MegawattHourRate(1.0));
    }

    #[test]
    fn test_multiple_days() {
        let points = vec![
            PricePoint::new(at(23), MegawattHourRate(1.0)),
            PricePoint::new(
                madrid().with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap(),
                MegawattHourRate(2.0),
            ),
        ];
        assert!(matches!(PriceSeries::try_from(points), Err(Error::InvalidSeries(_))));
    }

    #[test]
    fn test_too_long() {
        let start = at(0);
        let points: Vec<_> = (0..26)
            .map(|minutes| {
                PricePoint::new(start + chrono::TimeDelta::minutes(minutes), MegawattHourRate(1.0))
            })
            .collect();
        assert!(matches!(PriceSeries::try_from(points), Err(Error::InvalidSeries(_))));
    }

    #[test]
    fn test_non_finite_price() {
        let points = vec![PricePoint::new(at(0), MegawattHourRate(f64::NAN))];
        assert!(matches!(PriceSeries::try_from(points), Err(Error::InvalidSeries(_))));
    }
}
