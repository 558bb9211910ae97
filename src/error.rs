// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistogramError {
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected at least {expected} fields, found {found}")]
    MissingColumn {
        row: u64,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: column {column} value '{value}' is not numeric")]
    NonNumeric {
        row: u64,
        column: usize,
        value: String,
    },
    #[error("row {row}: column {column} value '{value}' is not finite")]
    NonFinite {
        row: u64,
        column: usize,
        value: String,
    },
    #[error("no data rows found in '{}'", path.display())]
    EmptySeries { path: PathBuf },
    #[error("histogram needs at least one bin, got {0}")]
    InvalidBinCount(usize),
    #[error("cannot histogram series: {0}")]
    Range(String),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("PDF conversion error: {0}")]
    Pdf(String),
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistogramError>;
