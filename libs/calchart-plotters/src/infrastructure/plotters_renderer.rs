//! plotters Chart Renderer Implementation
//!
//! This module implements the `ChartRenderer` port. Every call allocates its own
//! pixel buffer and drawing area, so there is no shared figure state: the drawing
//! context is released when the inner scope ends, whether drawing succeeded or
//! not, and concurrent calls never touch each other's pixels.

use std::fmt::Display;

use calchart_domain::{
    chart::dates::DATE_FORMAT, CalorieSeries, ChartError, ChartImage, ChartRenderer,
};
use chrono::{Duration, NaiveDate};
use image::{codecs::jpeg::JpegEncoder, ColorType};
use plotters::coord::ranged1d::Ranged;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;
use tracing::{debug, instrument};

use super::config::RenderConfig;

/// Number of y ticks requested from plotters; each gets a dashed gridline
const Y_TICKS: usize = 10;
const MAX_X_TICKS: usize = 12;

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(128, 128, 128);
const GRID_OPACITY: f64 = 0.7;

const FONT: &str = "sans-serif";

/// plotters-based implementation of the `ChartRenderer` port
///
/// Draws a line chart with a marker on every point. The x axis counts days from
/// the first point, so irregular gaps between measurements keep their real
/// proportions; tick labels are turned back into `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Default)]
pub struct PlottersRenderer {
    config: RenderConfig,
}

impl PlottersRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Draw the chart into `buffer` (packed RGB, `width * height * 3` bytes)
    fn draw(
        &self,
        series: &CalorieSeries,
        buffer: &mut [u8],
        size: (u32, u32),
    ) -> Result<(), ChartError> {
        let first = series
            .first_date()
            .ok_or_else(|| ChartError::render_failure("cannot render an empty series"))?;

        let span = series.span_days();
        let x_pad = (span / 20).max(1);
        let x_range = -x_pad..span + x_pad;
        let (y_min, y_max) = calculate_y_range(series)?;

        let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
        root.fill(&WHITE).map_err(|e| drawing_error("fill canvas", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.config.title, (FONT, 28).into_font())
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range.clone(), y_min..y_max)
            .map_err(|e| drawing_error("build chart", e))?;

        let format_tick = |offset: &i64| day_label(first, *offset);

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(&self.config.x_label)
            .y_desc(&self.config.y_label)
            .axis_desc_style((FONT, 18).into_font())
            .x_labels(series.len().clamp(2, MAX_X_TICKS))
            .y_labels(Y_TICKS)
            // plotters only rotates text by quarter turns.
            .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
            .y_label_style((FONT, 14).into_font())
            .x_label_formatter(&format_tick)
            .y_label_formatter(&|v: &f64| format!("{v:.0}"))
            .draw()
            .map_err(|e| drawing_error("draw axes", e))?;

        // Horizontal dashed gridlines at the same ticks the y labels use.
        let y_ticks = chart.as_coord_spec().y_spec().key_points(Y_TICKS);
        for y in y_ticks {
            chart
                .draw_series(DashedLineSeries::new(
                    [(x_range.start, y), (x_range.end, y)],
                    6,
                    4,
                    GRID_COLOR.mix(GRID_OPACITY).stroke_width(1),
                ))
                .map_err(|e| drawing_error("draw gridline", e))?;
        }

        chart
            .draw_series(
                LineSeries::new(
                    series
                        .points()
                        .iter()
                        .map(|p| ((p.date - first).num_days(), p.calories)),
                    LINE_COLOR.stroke_width(2),
                )
                .point_size(6),
            )
            .map_err(|e| drawing_error("draw series", e))?;

        root.present().map_err(|e| drawing_error("present", e))?;
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    #[instrument(skip_all, fields(points = series.len()))]
    fn render(&self, series: &CalorieSeries) -> Result<ChartImage, ChartError> {
        let (width, height) = self.config.pixel_size();
        if width == 0 || height == 0 {
            return Err(ChartError::render_failure(format!(
                "invalid figure size {width}x{height}"
            )));
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        // The drawing area borrows the buffer only inside draw().
        self.draw(series, &mut buffer, (width, height))?;

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, self.config.jpeg_quality)
            .encode(&buffer, width, height, ColorType::Rgb8)
            .map_err(|e| ChartError::render_failure(format!("JPEG encoding failed: {e}")))?;

        debug!(width, height, bytes = jpeg.len(), "Encoded chart as JPEG");

        Ok(ChartImage::jpeg(jpeg, width, height))
    }
}

/// Helper function to determine Y-axis range with padding
///
/// Padding grows with the magnitude of the values so that huge, equal values
/// still get a range wider than one float step. A range that is empty or not
/// finite is rejected: plotters cannot place ticks on it.
fn calculate_y_range(series: &CalorieSeries) -> Result<(f64, f64), ChartError> {
    let Some((min_val, max_val)) = series.calorie_bounds() else {
        return Ok((0.0, 100.0));
    };

    let magnitude = max_val.abs().max(min_val.abs());
    let padding = ((max_val - min_val) * 0.1)
        .max(magnitude * 0.05)
        .max(1.0);
    let y_min = if min_val >= 0.0 {
        (min_val - padding).max(0.0)
    } else {
        min_val - padding
    };
    let y_max = max_val + padding;

    if !(y_max - y_min).is_finite() || y_max <= y_min {
        return Err(ChartError::render_failure(format!(
            "calorie values {min_val}..{max_val} cannot be plotted on a finite axis"
        )));
    }

    Ok((y_min, y_max))
}

fn day_label(first: NaiveDate, offset: i64) -> String {
    first
        .checked_add_signed(Duration::days(offset))
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn drawing_error(stage: &str, e: impl Display) -> ChartError {
    ChartError::render_failure(format!("failed to {stage}: {e}"))
}
