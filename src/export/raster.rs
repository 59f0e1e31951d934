//! Rasterizing chart configurations into RGB buffers.
//!
//! Only shapes are drawn (columns, lines and point markers, funnel segments,
//! pie wedges, legend swatches) in the colors of the configuration. Labels
//! and tooltips are left to interactive renderers.

use crate::chart::{
    ChartBody, ChartConfig, Layout, Legend, PieGroup, SeriesMark, SlicedChart, XyChart, XySeries,
};
use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::profile_scope;
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Circle, DrawingArea, IntoDrawingArea, PathElement, Polygon, RGBColor,
    Rectangle,
};
use plotters::style::Color as _;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const MARGIN: i32 = 20;
const AXIS_GUTTER: i32 = 50;
const LEGEND_HEIGHT: i32 = 34;
const SWATCH: i32 = 14;
const GRID_LINES: usize = 5;

fn render_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}

fn rgb(color: Color) -> RGBColor {
    let (r, g, b) = color.to_rgb();
    RGBColor(r, g, b)
}

/// Pixel rectangle of the plot area
#[derive(Clone, Copy, Debug)]
struct Frame {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Frame {
    fn width(&self) -> i32 {
        (self.right - self.left).max(1)
    }

    fn height(&self) -> i32 {
        (self.bottom - self.top).max(1)
    }
}

/// Draw `config` into a `width × height` RGB8 buffer
pub fn rasterize(
    config: &ChartConfig,
    width: u32,
    height: u32,
    background: Color,
) -> ChartResult<Vec<u8>> {
    profile_scope!("rasterize");
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&rgb(background)).map_err(render_err)?;

        let legend_room = if config.legend.is_some() { LEGEND_HEIGHT } else { 0 };
        let frame = Frame {
            left: MARGIN,
            top: MARGIN,
            right: width as i32 - MARGIN,
            bottom: height as i32 - MARGIN - legend_room,
        };

        match &config.body {
            ChartBody::Xy(chart) => {
                let grid = Color::interpolate(
                    f64::from(config.theme.grid_opacity),
                    background,
                    config.theme.grid_color,
                );
                draw_xy(&root, chart, frame, grid)?;
            }
            ChartBody::Sliced(chart) => draw_sliced(&root, chart, frame)?,
            ChartBody::Pie(group) => draw_pies(&root, group, frame)?,
        }

        if let Some(legend) = &config.legend {
            draw_legend(&root, legend, frame.bottom + MARGIN / 2, width as i32)?;
        }

        root.present().map_err(render_err)?;
    }
    Ok(buffer)
}

// ============================================================================
// XY Charts
// ============================================================================

/// Value range shown on the value axis
fn value_range(chart: &XyChart) -> (f64, f64) {
    let stacked = chart.series.iter().any(|s| s.stacked);
    let categories = chart.category_axis.categories.len();

    let mut low = 0.0_f64;
    let mut high = 0.0_f64;
    if stacked {
        for index in 0..categories {
            let (positive, negative) = stack_extent(&chart.series, index);
            high = high.max(positive);
            low = low.min(negative);
        }
    } else {
        for value in chart.series.iter().flat_map(|s| s.data.iter().filter_map(|p| p.value)) {
            high = high.max(value);
            low = low.min(value);
        }
    }

    let low = chart.value_axis.min.unwrap_or(low);
    let high = chart.value_axis.max.unwrap_or(high);
    if high > low { (low, high) } else { (low, low + 1.0) }
}

fn stack_extent(series: &[XySeries], index: usize) -> (f64, f64) {
    series
        .iter()
        .filter_map(|s| s.data.get(index).and_then(|p| p.value))
        .fold((0.0, 0.0), |(pos, neg), v| {
            if v >= 0.0 { (pos + v, neg) } else { (pos, neg + v) }
        })
}

fn draw_xy(root: &Area<'_>, chart: &XyChart, frame: Frame, grid: Color) -> ChartResult<()> {
    let frame = Frame {
        left: frame.left + AXIS_GUTTER,
        bottom: frame.bottom - AXIS_GUTTER / 2,
        ..frame
    };
    let (low, high) = value_range(chart);
    let categories = chart.category_axis.categories.len().max(1);
    let category_on_x = chart.category_axis.side == crate::chart::AxisSide::X;

    // Value -> pixel along the value axis
    let value_px = |value: f64| -> i32 {
        let t = ((value.clamp(low, high) - low) / (high - low)) as f32;
        if category_on_x {
            frame.bottom - (t * frame.height() as f32).round() as i32
        } else {
            frame.left + (t * frame.width() as f32).round() as i32
        }
    };
    // Category index -> (start, end) pixels along the category axis
    let cell = |index: usize| -> (f32, f32) {
        if category_on_x {
            let size = frame.width() as f32 / categories as f32;
            let start = frame.left as f32 + size * index as f32;
            (start, start + size)
        } else {
            let size = frame.height() as f32 / categories as f32;
            let slot = if chart.category_axis.inversed {
                index
            } else {
                categories - 1 - index
            };
            let start = frame.top as f32 + size * slot as f32;
            (start, start + size)
        }
    };

    for step in 0..=GRID_LINES {
        let value = low + (high - low) * step as f64 / GRID_LINES as f64;
        let p = value_px(value);
        let line = if category_on_x {
            vec![(frame.left, p), (frame.right, p)]
        } else {
            vec![(p, frame.top), (p, frame.bottom)]
        };
        root.draw(&PathElement::new(line, rgb(grid).stroke_width(1)))
            .map_err(render_err)?;
    }

    let span = chart.category_axis.cell.map(|c| (c.start, c.end)).unwrap_or((0.2, 0.8));
    let column_count = chart
        .series
        .iter()
        .filter(|s| matches!(s.mark, SeriesMark::Column(_)))
        .count()
        .max(1);
    let mut stack_tops = vec![(0.0_f64, 0.0_f64); categories];

    for (series_index, series) in chart.series.iter().enumerate() {
        match &series.mark {
            SeriesMark::Column(style) => {
                let color = rgb(series.fill).filled();
                for (index, point) in series.data.iter().enumerate() {
                    let Some(value) = point.value else { continue };
                    let (start, end) = cell(index);
                    let inner_start = start + (end - start) * span.0;
                    let inner = (end - start) * (span.1 - span.0);

                    let (slot_start, slot_size) = if series.stacked {
                        (inner_start, inner)
                    } else {
                        let size = inner / column_count as f32;
                        (inner_start + size * series_index as f32, size)
                    };
                    let thickness = slot_size * (style.width_percent / 100.0).min(1.0);
                    let a = (slot_start + (slot_size - thickness) / 2.0).round() as i32;
                    let b = (slot_start + (slot_size + thickness) / 2.0).round() as i32;

                    let (base, tip) = if series.stacked {
                        let tops = &mut stack_tops[index.min(categories - 1)];
                        let base = if value >= 0.0 { tops.0 } else { tops.1 };
                        if value >= 0.0 {
                            tops.0 += value;
                        } else {
                            tops.1 += value;
                        }
                        (base, base + value)
                    } else {
                        (low.max(0.0).min(high), value)
                    };

                    let corners = if category_on_x {
                        [(a, value_px(base)), (b, value_px(tip))]
                    } else {
                        [(value_px(base), a), (value_px(tip), b)]
                    };
                    root.draw(&Rectangle::new(corners, color)).map_err(render_err)?;
                }
            }
            SeriesMark::Line(style) => {
                let color = rgb(series.fill);
                let stroke = series.stroke.map(rgb).unwrap_or(color);
                let mut segment: Vec<(i32, i32)> = Vec::new();
                let mut points: Vec<(i32, i32)> = Vec::new();

                for (index, point) in series.data.iter().enumerate() {
                    let (start, end) = cell(index);
                    let middle = ((start + end) / 2.0).round() as i32;
                    match point.value {
                        Some(value) => {
                            let p = if category_on_x {
                                (middle, value_px(value))
                            } else {
                                (value_px(value), middle)
                            };
                            segment.push(p);
                            points.push(p);
                        }
                        None => {
                            flush_line(root, &mut segment, stroke, style.stroke_width)?;
                        }
                    }
                }
                flush_line(root, &mut segment, stroke, style.stroke_width)?;

                let marker = rgb(style.marker.fill).filled();
                let radius = style.marker.radius.round() as i32;
                for p in points {
                    root.draw(&Circle::new(p, radius, marker)).map_err(render_err)?;
                }
            }
        }
    }
    Ok(())
}

fn flush_line(
    root: &Area<'_>,
    segment: &mut Vec<(i32, i32)>,
    color: RGBColor,
    width: f32,
) -> ChartResult<()> {
    if segment.len() > 1 {
        let style = color.stroke_width(width.round().max(1.0) as u32);
        root.draw(&PathElement::new(std::mem::take(segment), style))
            .map_err(render_err)?;
    }
    segment.clear();
    Ok(())
}

// ============================================================================
// Funnels
// ============================================================================

fn draw_sliced(root: &Area<'_>, chart: &SlicedChart, frame: Frame) -> ChartResult<()> {
    let count = chart.series.len().max(1) as i32;
    let lane = frame.width() / count;

    for (lane_index, series) in chart.series.iter().enumerate() {
        let left = frame.left + lane * lane_index as i32;
        let lane_frame = Frame {
            left: left + MARGIN / 2,
            right: left + lane - MARGIN / 2,
            ..frame
        };

        let values: Vec<f64> = series
            .data
            .iter()
            .map(|d| d.value.unwrap_or(0.0).max(0.0))
            .collect();
        let peak = values.iter().copied().fold(0.0_f64, f64::max);
        if peak <= 0.0 || values.is_empty() {
            continue;
        }

        let segments = values.len();
        for (index, datum) in series.data.iter().enumerate() {
            let top_ratio = values[index] / peak;
            let bottom_ratio = values.get(index + 1).copied().unwrap_or(values[index]) / peak;
            let color = rgb(datum.label.fill).filled();

            let polygon = match series.orientation {
                Layout::Vertical => {
                    let size = lane_frame.height() as f64 / segments as f64;
                    let y0 = lane_frame.top + (size * index as f64).round() as i32;
                    let y1 = lane_frame.top + (size * (index + 1) as f64).round() as i32;
                    let center = (lane_frame.left + lane_frame.right) / 2;
                    let half = |ratio: f64| (ratio * lane_frame.width() as f64 / 2.0).round() as i32;
                    vec![
                        (center - half(top_ratio), y0),
                        (center + half(top_ratio), y0),
                        (center + half(bottom_ratio), y1),
                        (center - half(bottom_ratio), y1),
                    ]
                }
                Layout::Horizontal => {
                    let size = lane_frame.width() as f64 / segments as f64;
                    let x0 = lane_frame.left + (size * index as f64).round() as i32;
                    let x1 = lane_frame.left + (size * (index + 1) as f64).round() as i32;
                    let center = (lane_frame.top + lane_frame.bottom) / 2;
                    let half = |ratio: f64| (ratio * lane_frame.height() as f64 / 2.0).round() as i32;
                    vec![
                        (x0, center - half(top_ratio)),
                        (x1, center - half(bottom_ratio)),
                        (x1, center + half(bottom_ratio)),
                        (x0, center + half(top_ratio)),
                    ]
                }
            };
            root.draw(&Polygon::new(polygon, color)).map_err(render_err)?;
        }
    }
    Ok(())
}

// ============================================================================
// Pies
// ============================================================================

fn draw_pies(root: &Area<'_>, group: &PieGroup, frame: Frame) -> ChartResult<()> {
    for chart in &group.charts {
        let left = frame.left + (chart.x_percent / 100.0 * frame.width() as f32).round() as i32;
        let width = (chart.width_percent / 100.0 * frame.width() as f32).round() as i32;
        let center = (left + width / 2, (frame.top + frame.bottom) / 2);
        let radius = ((width / 2) - chart.padding_side.round() as i32)
            .min(frame.height() / 2)
            .max(1);

        let total: f64 = chart
            .series
            .slices
            .iter()
            .filter_map(|s| s.value)
            .filter(|v| *v > 0.0)
            .sum();
        if total <= 0.0 {
            continue;
        }

        let mut angle = -std::f64::consts::FRAC_PI_2;
        for slice in &chart.series.slices {
            let Some(value) = slice.value.filter(|v| *v > 0.0) else {
                continue;
            };
            let sweep = value / total * std::f64::consts::TAU;
            let wedge = wedge_points(center, radius, angle, sweep);
            root.draw(&Polygon::new(wedge, rgb(slice.fill).filled()))
                .map_err(render_err)?;
            angle += sweep;
        }
    }
    Ok(())
}

fn wedge_points(center: (i32, i32), radius: i32, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep.to_degrees() / 2.0).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let theta = start + sweep * step as f64 / steps as f64;
        points.push((
            center.0 + (f64::from(radius) * theta.cos()).round() as i32,
            center.1 + (f64::from(radius) * theta.sin()).round() as i32,
        ));
    }
    points
}

// ============================================================================
// Legend
// ============================================================================

fn draw_legend(root: &Area<'_>, legend: &Legend, top: i32, width: i32) -> ChartResult<()> {
    let stride = SWATCH * 3;
    let total = stride * legend.items.len() as i32;
    let mut x = ((width - total) / 2).max(MARGIN);
    for item in &legend.items {
        root.draw(&Rectangle::new(
            [(x, top), (x + SWATCH, top + SWATCH)],
            rgb(item.color).filled(),
        ))
        .map_err(render_err)?;
        x += stride;
    }
    Ok(())
}
