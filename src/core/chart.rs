//! Backend-agnostic chart geometry.
//!
//! Coordinates are in pixels relative to the top-left corner of the plot area,
//! that is inside the margins of the [`Layout`].

mod color;
mod layout;
mod scale;

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

pub use self::{color::Rgb, layout::Layout};
use self::{
    color::ColorScale,
    scale::{BandScale, LinearScale},
};
use crate::{
    core::{series::PriceSeries, statistics::Summary},
    fmt::Fixed,
    quantity::rate::{KilowattHourRate, MegawattHourRate},
};

/// Number of hour categories on the horizontal axis.
pub const N_HOURS: u32 = 24;

const BAR_CORNER_RADIUS: f64 = 20.0;
const POINT_RADIUS: f64 = 5.0;
const LABEL_OFFSET: f64 = -10.0;
const N_VALUE_TICKS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderModel {
    pub layout: Layout,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<Bar>,
    pub points: Vec<Point>,
    pub mean_line: Line,
    pub highlight: Highlight,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub title: &'static str,
    pub ticks: Vec<Tick>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    /// Position along the axis.
    pub offset: f64,

    pub label: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub hour: u32,
    pub price: MegawattHourRate,
    pub rect: Rect,
    pub fill: Rgb,
    pub corner_radius: f64,
}

/// Price marker with its label above.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: Rgb,
    pub label: String,
    pub label_offset: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Rgb,
    pub stroke_width: f64,
}

/// Outline around the bar of the current hour.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Highlight {
    pub hour: u32,

    /// [`None`] when the series has no price for the current hour,
    /// in which case the outline has zero height and sits on the baseline.
    pub price: Option<MegawattHourRate>,

    pub rect: Rect,
    pub stroke: Rgb,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

/// Build the chart with the default layout.
pub fn build<Tz: TimeZone>(series: &PriceSeries, now: &DateTime<Tz>) -> RenderModel {
    build_with_layout(Layout::default(), series, now)
}

pub fn build_with_layout<Tz: TimeZone>(
    layout: Layout,
    series: &PriceSeries,
    now: &DateTime<Tz>,
) -> RenderModel {
    let summary = Summary::from(series);
    let width = layout.inner_width();
    let height = layout.inner_height();

    let x = BandScale::new(N_HOURS, width, layout.padding);
    let y = LinearScale::new((0.0, summary.max.0.max(0.0)), (height, 0.0));
    let color = ColorScale::from(&summary);
    let bar_rect = |hour: u32, price: MegawattHourRate| {
        let top = y.apply(price.0);
        let baseline = y.apply(0.0);
        Rect {
            x: x.position(hour),
            y: top.min(baseline),
            width: x.bandwidth(),
            height: (baseline - top).abs(),
        }
    };

    let bars = series
        .iter()
        .map(|point| Bar {
            hour: point.hour(),
            price: point.price,
            rect: bar_rect(point.hour(), point.price),
            fill: color.color(point.price.0),
            corner_radius: BAR_CORNER_RADIUS,
        })
        .collect();

    let points = series
        .iter()
        .map(|point| Point {
            x: x.center(point.hour()),
            y: y.apply(point.price.0),
            radius: POINT_RADIUS,
            fill: Rgb::BLACK,
            label: Fixed::new(KilowattHourRate::from(point.price).0, 3).to_string(),
            label_offset: LABEL_OFFSET,
        })
        .collect();

    let mean_line = Line {
        x1: 0.0,
        y1: y.apply(summary.mean.0),
        x2: width,
        y2: y.apply(summary.mean.0),
        stroke: Rgb::PURPLE,
        stroke_width: 2.0,
    };

    let current_hour = now.hour();
    let current_price = series.at_hour(current_hour).map(|point| point.price);
    let highlight = Highlight {
        hour: current_hour,
        price: current_price,
        rect: bar_rect(current_hour, current_price.unwrap_or(MegawattHourRate::ZERO)),
        stroke: Rgb::BLUE,
        stroke_width: 3.0,
        corner_radius: BAR_CORNER_RADIUS,
    };

    let x_axis = Axis {
        title: "Horas",
        ticks: (0..N_HOURS)
            .map(|hour| Tick { offset: x.center(hour), label: hour.to_string() })
            .collect(),
    };
    let y_axis = Axis {
        title: "€/kWh",
        ticks: y
            .ticks(N_VALUE_TICKS)
            .into_iter()
            .map(|value| Tick {
                offset: y.apply(value),
                label: Fixed::new(KilowattHourRate::from(MegawattHourRate(value)).0, 2)
                    .to_string(),
            })
            .collect(),
    };

    RenderModel { layout, x_axis, y_axis, bars, points, mean_line, highlight }
}
