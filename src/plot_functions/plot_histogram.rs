// src/plot_functions/plot_histogram.rs

use std::path::Path;
use tracing::info;

use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_analysis::histogram::Histogram;
use crate::error::{HistogramError, Result};
use crate::output::{self, OutputFormat};
use crate::plot_framework::{
    draw_histogram_chart, draw_single_chart_svg, HistogramLabels, HistogramPlotConfig,
};

/// Renders the histogram figure to an SVG document.
pub fn render_histogram_svg(histogram: &Histogram, labels: &HistogramLabels) -> Result<String> {
    let plot_config = HistogramPlotConfig::from_histogram(histogram, labels);
    draw_single_chart_svg(PLOT_WIDTH, PLOT_HEIGHT, |area| {
        draw_histogram_chart(area, &plot_config)
    })
    .map_err(|e| HistogramError::Render(e.to_string()))
}

/// Generates the histogram plot and writes it to `output_path`.
///
/// The document is fully encoded before the file is opened, so a failure
/// leaves any existing file untouched and never creates a partial one.
pub fn plot_histogram(
    histogram: &Histogram,
    output_path: &Path,
    labels: &HistogramLabels,
) -> Result<()> {
    let format = OutputFormat::from_path(output_path)?;
    let svg = render_histogram_svg(histogram, labels)?;
    let bytes = output::encode(svg, format)?;
    output::save(&bytes, output_path)?;
    info!(
        "Histogram plot ({} bins) saved as '{}'.",
        histogram.bin_count(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_pdf_to_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("histogram_plot.pdf");
        let hist = Histogram::compute(&[1.0, 2.0, 3.0, 4.0, 5.0], 50).unwrap();
        plot_histogram(&hist, &out, &HistogramLabels::default()).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn writes_svg_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("histogram_plot.svg");
        let hist = Histogram::compute(&[3.0; 4], 50).unwrap();
        plot_histogram(&hist, &out, &HistogramLabels::default()).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("LFSR"));
    }

    #[test]
    fn custom_labels_are_rendered() {
        let hist = Histogram::compute(&[1.0, 9.0], 50).unwrap();
        let labels = HistogramLabels {
            title: "Galois".to_string(),
            x_label: "state".to_string(),
            y_label: "Occurrences".to_string(),
        };
        let svg = render_histogram_svg(&hist, &labels).unwrap();
        assert!(svg.contains("Galois"));
        assert!(svg.contains("Occurrences"));
    }

    #[test]
    fn unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("histogram_plot.png");
        let hist = Histogram::compute(&[1.0, 2.0], 50).unwrap();
        let err = plot_histogram(&hist, &out, &HistogramLabels::default()).unwrap_err();
        assert!(matches!(err, HistogramError::UnsupportedFormat(_)));
        assert!(!out.exists());
    }
}
