//! SVG rendering of a [`ChartLayout`] with plotters.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::dash::dash_intervals;
use super::layout::{plot_x, ChartLayout, TextLabel, VAnchor};
use crate::error::{KvChartError, Result};
use crate::hardware::Rgb;

/// Height of the reference canvas in points (7.5 in at 72 pt/in).
const CANVAS_HEIGHT_PT: f64 = 7.5 * 72.0;

const FONT: &str = "sans-serif";

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

/// Pixel geometry derived from the canvas size.
#[derive(Debug, Clone, Copy)]
struct Scale {
    px_per_pt: f64,
}

impl Scale {
    fn new(height_px: u32) -> Self {
        Self { px_per_pt: f64::from(height_px) / CANVAS_HEIGHT_PT }
    }

    fn px(self, pt: f64) -> f64 {
        pt * self.px_per_pt
    }

    fn stroke(self, pt: f64) -> u32 {
        (self.px(pt).round() as u32).max(1)
    }
}

fn draw_err<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> KvChartError + '_ {
    move |e| KvChartError::render(path, e)
}

/// Draw `layout` to an SVG file of `size` pixels at `path`.
pub fn render_svg(layout: &ChartLayout, path: &Path, size: (u32, u32)) -> Result<()> {
    let scale = Scale::new(size.1);
    let fail = draw_err(path);

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(&fail)?;

    let (x_min, x_max) = (plot_x(layout.x_range.0), plot_x(layout.x_range.1));
    let (y_min, y_max) = (layout.y_range.0, layout.y_range.1);

    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, (FONT, scale.px(16.0)))
        .margin(scale.px(12.0) as u32)
        .x_label_area_size(scale.px(36.0) as u32)
        .y_label_area_size(scale.px(44.0) as u32)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(&fail)?;

    // x ticks sit on powers of two and are drawn from the layout below
    let grid_style = BLACK.mix(0.3).stroke_width(1);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_labels(10)
        .max_light_lines(0)
        .bold_line_style(grid_style)
        .label_style((FONT, scale.px(10.0)))
        .axis_desc_style((FONT, scale.px(14.0)))
        .x_desc(layout.x_desc.as_str())
        .y_desc(layout.y_desc.as_str())
        .draw()
        .map_err(&fail)?;

    chart
        .draw_series(layout.x_ticks.iter().map(|tick| {
            let x = plot_x(tick.seq_len);
            PathElement::new(vec![(x, y_min), (x, y_max)], grid_style)
        }))
        .map_err(&fail)?;
    let tick_style = (FONT, scale.px(10.0))
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let tick_gap = scale.px(4.0) as i32;
    for tick in &layout.x_ticks {
        let (x, y) = chart.backend_coord(&(plot_x(tick.seq_len), y_min));
        root.draw(&Text::new(tick.label.as_str(), (x, y + tick_gap), tick_style.clone()))
            .map_err(&fail)?;
    }

    let plot_px = chart.plotting_area().dim_in_pixel();
    // plot-space length of one point along each axis
    let unit_x = (x_max - x_min) / f64::from(plot_px.0.max(1)) * scale.px_per_pt;
    let unit_y = (y_max - y_min) / f64::from(plot_px.1.max(1)) * scale.px_per_pt;

    // weights band
    let band = &layout.weights;
    let band_style = RGBColor::from(band.color).mix(band.alpha).filled();
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_min, 0.0), (x_max, band.top_gb)],
            band_style,
        )))
        .map_err(&fail)?
        .label(band.legend.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 24, y + 6)], band_style));

    // KV region between the band and the curve, then the curve itself
    let curve = &layout.curve;
    let curve_color = RGBColor::from(curve.color);
    let fill: Vec<(f64, f64)> = curve.fill_points.iter().map(|&(x, y)| (plot_x(x), y)).collect();
    let points: Vec<(f64, f64)> = curve.points.iter().map(|&(x, y)| (plot_x(x), y)).collect();
    chart
        .draw_series(AreaSeries::new(
            fill.iter().copied(),
            curve.fill_baseline_gb,
            curve_color.mix(curve.fill_alpha).filled(),
        ))
        .map_err(&fail)?;
    let curve_style = curve_color.stroke_width(scale.stroke(curve.width_pt));
    chart
        .draw_series(LineSeries::new(points.iter().copied(), curve_style))
        .map_err(&fail)?
        .label(curve.legend.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], curve_style));

    for line in &layout.hardware {
        let style = RGBColor::from(line.color)
            .mix(line.alpha)
            .stroke_width(scale.stroke(line.width_pt));
        let unit = unit_x * line.width_pt;
        chart
            .draw_series(
                dash_intervals(x_min, x_max, line.stroke, unit)
                    .into_iter()
                    .map(|(a, b)| PathElement::new(vec![(a, line.gb), (b, line.gb)], style)),
            )
            .map_err(&fail)?;
    }

    let limit = &layout.design_limit;
    let limit_color = RGBColor::from(limit.color);
    let limit_x = plot_x(limit.seq_len);
    let limit_style = limit_color.stroke_width(scale.stroke(limit.width_pt));
    chart
        .draw_series(
            dash_intervals(y_min, y_max, limit.stroke, unit_y * limit.width_pt)
                .into_iter()
                .map(|(a, b)| PathElement::new(vec![(limit_x, a), (limit_x, b)], limit_style)),
        )
        .map_err(&fail)?;
    chart
        .draw_series(std::iter::once(Circle::new(
            (limit_x, limit.total_gb),
            scale.px(3.0) as i32,
            limit_color.filled(),
        )))
        .map_err(&fail)?;

    for label in layout.texts() {
        let anchor = chart.backend_coord(&(plot_x(label.seq_len), label.gb));
        draw_text(&root, label, anchor, scale).map_err(&fail)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.filled())
        .border_style(BLACK.mix(0.3).stroke_width(1))
        .label_font((FONT, scale.px(10.0)))
        .draw()
        .map_err(&fail)?;

    root.present().map_err(&fail)?;
    Ok(())
}

/// Draw a possibly multi-line label left-aligned at a pixel anchor.
fn draw_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    label: &TextLabel,
    (x, y): (i32, i32),
    scale: Scale,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let size = scale.px(label.size_pt);
    let line_height = (size * 1.2).round() as i32;
    let lines: Vec<&str> = label.lines().collect();
    let block = line_height * lines.len() as i32;
    let top = match label.anchor {
        VAnchor::Bottom => y - block,
        VAnchor::Center => y - block / 2,
    };

    let font = FontDesc::from((FONT, size));
    let font = if label.bold { font.style(FontStyle::Bold) } else { font };
    let style = font
        .color(&RGBColor::from(label.color))
        .pos(Pos::new(HPos::Left, VPos::Top));

    for (i, line) in lines.iter().enumerate() {
        let pos = (x, top + line_height * i as i32);
        area.draw(&Text::new(line.to_string(), pos, style.clone()))?;
    }
    Ok(())
}
