// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod output;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;

pub use error::{HistogramError, Result};
pub use pipeline::{run, PipelineConfig, RunSummary};

// Expose crate version, preferring a git-derived one when the build provides it.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
