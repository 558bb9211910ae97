// src/pipeline.rs

use std::path::PathBuf;
use tracing::info;

use crate::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, HISTOGRAM_BIN_COUNT, INPUT_DELIMITER,
    SERIES_COLUMN_INDEX,
};
use crate::data_analysis::histogram::Histogram;
use crate::data_input::series_parser::load_column;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::plot_framework::HistogramLabels;
use crate::plot_functions::plot_histogram::plot_histogram;

/// Everything a run needs. `Default` is the fixed LFSR setup: second column
/// of `./lfsr_output.csv`, 50 bins, written to `histogram_plot.pdf`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub delimiter: u8,
    pub column: usize,
    pub bin_count: usize,
    pub labels: HistogramLabels,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: INPUT_DELIMITER,
            column: SERIES_COLUMN_INDEX,
            bin_count: HISTOGRAM_BIN_COUNT,
            labels: HistogramLabels::default(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub values_read: usize,
    pub histogram: Histogram,
    pub output_path: PathBuf,
}

/// Load, select, bin and render.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    OutputFormat::from_path(&config.output_path)?;
    let values = load_column(&config.input_path, config.delimiter, config.column)?;

    let histogram = Histogram::compute(&values, config.bin_count)?;
    let (first, last) = histogram.range();
    info!(
        "Binned {} values into {} bins over [{}, {}] (width {:.4})",
        values.len(),
        histogram.bin_count(),
        first,
        last,
        histogram.bins.first().map(|b| b.width()).unwrap_or(0.0)
    );

    plot_histogram(&histogram, &config.output_path, &config.labels)?;

    Ok(RunSummary {
        values_read: values.len(),
        histogram,
        output_path: config.output_path.clone(),
    })
}
