use serde::Serialize;

use crate::{
    core::series::PriceSeries,
    quantity::rate::{KilowattHourRate, MegawattHourRate},
};

/// Unrounded extremes and mean of a series, in the source unit, computed in a single pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub min: MegawattHourRate,
    pub max: MegawattHourRate,
    pub mean: MegawattHourRate,
}

impl Summary {
    fn fold(first: MegawattHourRate, rest: impl Iterator<Item = MegawattHourRate>) -> Self {
        let (min, max, sum, count) =
            rest.fold((first, first, first.0, 1_u32), |(min, max, sum, count), price| {
                (min.min(price), max.max(price), sum + price.0, count + 1)
            });
        Self { min, max, mean: MegawattHourRate(sum / f64::from(count)) }
    }
}

impl From<&PriceSeries> for Summary {
    fn from(series: &PriceSeries) -> Self {
        let points = series.as_slice();
        Self::fold(points[0].price, points[1..].iter().map(|point| point.price))
    }
}

/// Daily price statistics as displayed to the user.
///
/// The rounding is asymmetric: the mean and the maximum are rounded to the nearest mill,
/// while the minimum is rounded up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub mean: KilowattHourRate,
    pub max: KilowattHourRate,
    pub min: KilowattHourRate,
}

impl From<&PriceSeries> for Statistics {
    fn from(series: &PriceSeries) -> Self {
        Summary::from(series).into()
    }
}

impl From<Summary> for Statistics {
    fn from(summary: Summary) -> Self {
        Self {
            mean: KilowattHourRate::from(MegawattHourRate(round_half_up(summary.mean.0))),
            max: KilowattHourRate::from(MegawattHourRate(round_half_up(summary.max.0))),
            min: KilowattHourRate::from(MegawattHourRate(summary.min.0.ceil())),
        }
    }
}

/// Round half-way cases towards positive infinity: `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
