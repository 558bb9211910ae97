// src/output/pdf.rs

use tracing::{debug, warn};
use usvg::fontdb::Database;

use crate::error::{HistogramError, Result};
use crate::font_config::SANS_SERIF_CANDIDATES;

/// Points the generic `sans-serif` family at a family that is actually
/// loaded. Returns the chosen family, or `None` when the database is empty.
pub fn resolve_sans_serif(fontdb: &mut Database) -> Option<String> {
    let has_family = |name: &str| {
        fontdb
            .faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    let family = SANS_SERIF_CANDIDATES
        .iter()
        .find(|name| has_family(**name))
        .map(|name| name.to_string())
        .or_else(|| {
            fontdb
                .faces()
                .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
        })?;
    fontdb.set_sans_serif_family(family.clone());
    Some(family)
}

/// Convert SVG string to PDF bytes. Text is resolved against system fonts.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    let fontdb = opt.fontdb_mut();
    fontdb.load_system_fonts();
    match resolve_sans_serif(fontdb) {
        Some(family) => debug!("Loaded {} font faces, sans-serif -> '{}'", fontdb.len(), family),
        None => warn!("No system fonts found; PDF text will be missing"),
    }

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| HistogramError::Pdf(e.to_string()))?;

    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), svg2pdf::PageOptions::default())
        .map_err(|e| HistogramError::Pdf(e.to_string()))
}
