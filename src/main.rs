// src/main.rs

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use lfsr_histogram::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, HISTOGRAM_BIN_COUNT, SERIES_COLUMN_INDEX,
};
use lfsr_histogram::{crate_version, run, PipelineConfig};

#[derive(Parser)]
#[command(name = "lfsr-histogram")]
#[command(about = "Plot a histogram of LFSR simulator output as PDF")]
#[command(version = crate_version())]
struct Cli {
    /// Tab-separated input file without a header row
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output document (.pdf or .svg)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Zero-based column holding the values
    #[arg(long, default_value_t = SERIES_COLUMN_INDEX)]
    column: usize,

    /// Number of equal-width bins
    #[arg(long, default_value_t = HISTOGRAM_BIN_COUNT)]
    bins: usize,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let config = PipelineConfig {
        input_path: cli.input,
        output_path: cli.output,
        column: cli.column,
        bin_count: cli.bins,
        ..PipelineConfig::default()
    };

    info!("lfsr-histogram {}", crate_version());
    if let Err(e) = run(&config) {
        error!("{e}");
        std::process::exit(1);
    }
}
