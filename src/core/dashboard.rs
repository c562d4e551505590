use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::{
    core::{
        chart::{self, RenderModel},
        series::PriceSeries,
        statistics::Statistics,
    },
    fmt::SpanishDate,
    quantity::rate::KilowattHourRate,
};

/// Everything there is to display about the day, derived once from the fetched series.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub date: String,
    pub statistics: Statistics,
    pub cards: [Card; 3],
    pub chart: RenderModel,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub date: String,
    pub price: KilowattHourRate,
}

impl Dashboard {
    pub fn new<Tz: TimeZone>(series: &PriceSeries, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        let date = SpanishDate::new(now).to_string();
        let statistics = Statistics::from(series);
        let card = |title, price| Card { title, date: date.clone(), price };
        let cards = [
            card("Precio medio del día", statistics.mean),
            card("Precio máximo del día", statistics.max),
            card("Precio mínimo del día", statistics.min),
        ];
        Self { date, statistics, cards, chart: chart::build(series, now) }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::series::tests::{at, series_of};

    #[test]
    fn test_new() {
        let dashboard = Dashboard::new(&series_of(&[100.0, 200.0, 300.0]), &at(1));
        assert_eq!(dashboard.date, "15 de Enero de 2024");
        assert_eq!(dashboard.cards[0].title, "Precio medio del día");
        assert_eq!(dashboard.cards[2].date, dashboard.date);
        assert_abs_diff_eq!(dashboard.cards[1].price.0, 0.3);
        assert_eq!(dashboard.cards[0].price.to_string(), "0.2 €/kWh");
        assert_eq!(dashboard.chart.highlight.price.map(|price| price.0), Some(200.0));
    }
}
