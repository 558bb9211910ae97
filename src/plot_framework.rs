// src/plot_framework.rs

use plotters::backend::SVGBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Rectangle;
use plotters::style::colors::WHITE;
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    COLOR_HISTOGRAM_BAR, COLOR_HISTOGRAM_EDGE, LINE_WIDTH_BAR_EDGE, PLOT_TITLE,
    X_AXIS_LABEL, X_AXIS_MARGIN_FRACTION, Y_AXIS_HEADROOM_FRACTION, Y_AXIS_LABEL,
};
use crate::data_analysis::histogram::Histogram;
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_TICK_LABEL};

/// Title and axis descriptions of a histogram figure.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for HistogramLabels {
    fn default() -> Self {
        Self {
            title: PLOT_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct HistogramPlotConfig {
    pub labels: HistogramLabels,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// (range_start, range_end, count) per bar.
    pub bars: Vec<(f64, f64, f64)>,
    pub fill_color: RGBColor,
    pub edge_color: RGBColor,
}

impl HistogramPlotConfig {
    pub fn from_histogram(histogram: &Histogram, labels: &HistogramLabels) -> Self {
        let (x_range, y_range) = calculate_histogram_ranges(histogram);
        Self {
            labels: labels.clone(),
            x_range,
            y_range,
            bars: histogram
                .bins
                .iter()
                .map(|b| (b.range_start, b.range_end, b.count as f64))
                .collect(),
            fill_color: COLOR_HISTOGRAM_BAR,
            edge_color: *COLOR_HISTOGRAM_EDGE,
        }
    }
}

/// Plot ranges for a histogram: a small margin either side of the bin edges,
/// and 0 up to the tallest bar plus headroom (at least 1).
pub fn calculate_histogram_ranges(histogram: &Histogram) -> (Range<f64>, Range<f64>) {
    let (first, last) = histogram.range();
    let span = (last - first).abs();
    let pad = if span < 1e-12 { 0.5 } else { span * X_AXIS_MARGIN_FRACTION };
    let top = (histogram.max_count() as f64 * (1.0 + Y_AXIS_HEADROOM_FRACTION)).max(1.0);
    (first - pad..last + pad, 0.0..top)
}

/// Y-axis tick label for a bin count. Large counts use "k" and "M" notation.
pub fn format_count_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.fract() != 0.0 && y.abs() < 10.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// X-axis tick label. Precision follows the width of the plotted range.
pub fn format_value_label(x: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.0}", x)
    } else if span >= 1.0 {
        format!("{:.1}", x)
    } else {
        format!("{:.3}", x)
    }
}

/// Draws a histogram chart (adjacent bars with edges) into `area`.
pub fn draw_histogram_chart(
    area: &DrawingArea<SVGBackend, Shift>,
    plot_config: &HistogramPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.labels.title, FONT_TUPLE_CHART_TITLE)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    let x_span = plot_config.x_range.end - plot_config.x_range.start;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&plot_config.labels.x_label)
        .y_desc(&plot_config.labels.y_label)
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&|x| format_value_label(*x, x_span))
        .y_label_formatter(&|y| format_count_label(*y))
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .label_style(FONT_TUPLE_TICK_LABEL)
        .draw()?;

    // Fill first, then outline, so neighbouring bars share a visible edge.
    chart.draw_series(plot_config.bars.iter().map(|&(start, end, count)| {
        Rectangle::new([(start, 0.0), (end, count)], plot_config.fill_color.filled())
    }))?;
    chart.draw_series(plot_config.bars.iter().filter(|b| b.2 > 0.0).map(|&(start, end, count)| {
        Rectangle::new(
            [(start, 0.0), (end, count)],
            plot_config.edge_color.stroke_width(LINE_WIDTH_BAR_EDGE),
        )
    }))?;

    Ok(())
}

/// Renders a single-chart figure to an SVG document string.
pub fn draw_single_chart_svg<F>(
    width: u32,
    height: u32,
    mut draw_chart: F,
) -> Result<String, Box<dyn Error>>
where
    F: FnMut(&DrawingArea<SVGBackend, Shift>) -> Result<(), Box<dyn Error>>,
{
    let mut svg = String::new();
    {
        let root_area = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root_area.fill(&WHITE)?;
        draw_chart(&root_area)?;
        root_area.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_start_at_zero_with_headroom() {
        let hist = Histogram::compute(&[0.0, 1.0, 1.0, 2.0], 2).unwrap();
        let (x, y) = calculate_histogram_ranges(&hist);
        assert!(x.start < 0.0 && x.end > 2.0);
        assert_eq!(y.start, 0.0);
        assert!(y.end > 3.0);
    }

    #[test]
    fn empty_y_range_is_never_flat() {
        let hist = Histogram { bins: vec![] };
        let (x, y) = calculate_histogram_ranges(&hist);
        assert!(x.end > x.start);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn value_labels_follow_span() {
        assert_eq!(format_value_label(40000.0, 65535.0), "40000");
        assert_eq!(format_value_label(2.24, 4.0), "2.2");
        assert_eq!(format_value_label(0.1234, 0.5), "0.123");
    }

    #[test]
    fn svg_contains_labels() {
        let hist = Histogram::compute(&[1.0, 2.0, 3.0, 4.0, 5.0], 50).unwrap();
        let config = HistogramPlotConfig::from_histogram(&hist, &HistogramLabels::default());
        let svg = draw_single_chart_svg(640, 480, |area| draw_histogram_chart(area, &config))
            .unwrap();
        assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
        assert!(svg.contains("LFSR"));
        assert!(svg.contains("Frequency"));
        assert!(svg.contains("<rect"));
    }
}
