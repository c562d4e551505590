use plotters::{
    coord::Shift,
    prelude::*,
    style::{
        FontTransform,
        text_anchor::{HPos, Pos, VPos},
    },
};

use crate::{
    core::chart::{Layout, Rect, RenderModel, Rgb},
    prelude::*,
};

const FONT_FAMILY: &str = "sans-serif";
const TICK_LENGTH: f64 = 6.0;

/// Draw the chart as an SVG document.
#[instrument(skip_all, fields(n_bars = model.bars.len()))]
pub fn render_svg(model: &RenderModel) -> Result<String> {
    let mut svg = String::new();
    {
        let canvas = Canvas(model.layout);
        let root = SVGBackend::with_string(&mut svg, canvas.size()).into_drawing_area();
        root.fill(&WHITE)?;

        for bar in &model.bars {
            let (top_left, bottom_right) = canvas.rect(bar.rect);
            root.draw(&Rectangle::new([top_left, bottom_right], to_color(bar.fill).filled()))?;
        }

        let label_style = (FONT_FAMILY, 10.0)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        for point in &model.points {
            let center = canvas.at(point.x, point.y);
            let style = to_color(point.fill).filled();
            root.draw(&Circle::new(center, to_pixels(point.radius), style))?;
            root.draw(&Text::new(
                point.label.as_str(),
                canvas.at(point.x, point.y + point.label_offset),
                label_style.clone(),
            ))?;
        }

        let line = &model.mean_line;
        root.draw(&PathElement::new(
            vec![canvas.at(line.x1, line.y1), canvas.at(line.x2, line.y2)],
            to_color(line.stroke).stroke_width(to_pixels(line.stroke_width).unsigned_abs()),
        ))?;

        let highlight = &model.highlight;
        let (top_left, bottom_right) = canvas.rect(highlight.rect);
        let style = to_color(highlight.stroke)
            .stroke_width(to_pixels(highlight.stroke_width).unsigned_abs());
        root.draw(&Rectangle::new([top_left, bottom_right], style))?;

        draw_axes(&root, &canvas, model)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_axes(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    canvas: &Canvas,
    model: &RenderModel,
) -> Result {
    let width = model.layout.inner_width();
    let height = model.layout.inner_height();
    let margin = model.layout.margin;
    let font = (FONT_FAMILY, 10.0).into_font().color(&BLACK);

    root.draw(&PathElement::new(vec![canvas.at(0.0, height), canvas.at(width, height)], BLACK))?;
    let x_label_style = font.pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &model.x_axis.ticks {
        root.draw(&PathElement::new(
            vec![canvas.at(tick.offset, height), canvas.at(tick.offset, height + TICK_LENGTH)],
            BLACK,
        ))?;
        root.draw(&Text::new(
            tick.label.as_str(),
            canvas.at(tick.offset, height + TICK_LENGTH + 2.0),
            x_label_style.clone(),
        ))?;
    }

    root.draw(&PathElement::new(vec![canvas.at(0.0, 0.0), canvas.at(0.0, height)], BLACK))?;
    let y_label_style = font.pos(Pos::new(HPos::Right, VPos::Center));
    for tick in &model.y_axis.ticks {
        root.draw(&PathElement::new(
            vec![canvas.at(-TICK_LENGTH, tick.offset), canvas.at(0.0, tick.offset)],
            BLACK,
        ))?;
        root.draw(&Text::new(
            tick.label.as_str(),
            canvas.at(-TICK_LENGTH - 3.0, tick.offset),
            y_label_style.clone(),
        ))?;
    }

    let title_font = (FONT_FAMILY, 12.0, FontStyle::Bold).into_font().color(&BLACK);
    root.draw(&Text::new(
        model.x_axis.title,
        canvas.at(width / 2.0, height + margin.bottom),
        title_font.pos(Pos::new(HPos::Center, VPos::Bottom)),
    ))?;
    root.draw(&Text::new(
        model.y_axis.title,
        canvas.at(9.0 - margin.left, height / 2.0),
        title_font
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;
    Ok(())
}

/// Translates plot-area coordinates into canvas pixels.
struct Canvas(Layout);

impl Canvas {
    fn size(&self) -> (u32, u32) {
        (to_pixels(self.0.width).unsigned_abs(), to_pixels(self.0.height).unsigned_abs())
    }

    fn at(&self, x: f64, y: f64) -> (i32, i32) {
        (to_pixels(self.0.margin.left + x), to_pixels(self.0.margin.top + y))
    }

    fn rect(&self, rect: Rect) -> ((i32, i32), (i32, i32)) {
        (self.at(rect.x, rect.y), self.at(rect.x + rect.width, rect.y + rect.height))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn to_pixels(value: f64) -> i32 {
    value.round() as i32
}

const fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        chart::build,
        series::tests::{at, series_of},
    };

    #[test]
    fn test_render_svg() -> Result {
        let model = build(&series_of(&[100.0, 200.0, 300.0]), &at(2));
        let svg = render_svg(&model)?;
        assert!(svg.contains("<svg"));
        // Background, three bars and the highlight:
        assert_eq!(svg.matches("<rect").count(), 5);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("0.300"));
        assert!(svg.contains("€/kWh"));
        Ok(())
    }

    #[test]
    fn test_canvas() {
        let canvas = Canvas(Layout::default());
        assert_eq!(canvas.size(), (1000, 400));
        assert_eq!(canvas.at(0.0, 350.0), (60, 370));
    }
}
