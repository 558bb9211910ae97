// src/output/mod.rs

pub mod pdf;

use std::path::Path;

use crate::error::{HistogramError, Result};

/// Document format of the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl OutputFormat {
    /// Picks the format from the path's extension. Paths without one are PDF.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(Self::Pdf),
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(Self::Pdf),
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(Self::Svg),
            Some(other) => Err(HistogramError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Converts an SVG document into the bytes of the requested format.
pub fn encode(svg: String, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Pdf => pdf::svg_to_pdf(&svg),
        OutputFormat::Svg => Ok(svg.into_bytes()),
    }
}

/// Writes a finished document, replacing any existing file.
pub fn save(bytes: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| HistogramError::Write {
        path: path.to_path_buf(),
        source,
    })
}
