// src/font_config.rs

// Font style constants for plot rendering.
// All text in the histogram figure goes through these so the chart and the
// PDF conversion agree on a single family.

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_TICK_LABEL};

/// Font family written into the SVG. Resolved against system fonts when the
/// SVG is converted to PDF.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_TICK_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TICK_LABEL);

/// Families tried, in order, for the generic `sans-serif` family when the SVG
/// is converted to PDF. The first one installed wins; if none are, the first
/// loaded face's family is used.
pub const SANS_SERIF_CANDIDATES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "FreeSans",
];
