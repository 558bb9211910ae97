// src/constants.rs

use plotters::style::colors::BLACK;
use plotters::style::RGBColor;

// Default input and output locations, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "./lfsr_output.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "histogram_plot.pdf";

// Input table layout.
pub const INPUT_DELIMITER: u8 = b'\t';
pub const INPUT_COMMENT_PREFIX: u8 = b'#'; // The LFSR producer writes a "#x\ty" label line.
pub const SERIES_COLUMN_INDEX: usize = 1; // Second column, no header row.

// Histogram binning.
pub const HISTOGRAM_BIN_COUNT: usize = 50;
pub const DEGENERATE_RANGE_HALF_WIDTH: f64 = 0.5; // Used when every value is identical.

// Plot labels.
pub const PLOT_TITLE: &str = "LFSR";
pub const X_AXIS_LABEL: &str = "n";
pub const Y_AXIS_LABEL: &str = "Frequency";

// Plot dimensions (SVG user units, rendered 1:1 as PDF points).
pub const PLOT_WIDTH: u32 = 640;
pub const PLOT_HEIGHT: u32 = 480;

// Axis headroom as a fraction of the data span.
pub const X_AXIS_MARGIN_FRACTION: f64 = 0.05;
pub const Y_AXIS_HEADROOM_FRACTION: f64 = 0.05;

// --- Plot Color Assignments ---
pub const COLOR_HISTOGRAM_BAR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const COLOR_HISTOGRAM_EDGE: &RGBColor = &BLACK;

// Stroke widths
pub const LINE_WIDTH_BAR_EDGE: u32 = 1;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_TICK_LABEL: i32 = 12;

// src/constants.rs
