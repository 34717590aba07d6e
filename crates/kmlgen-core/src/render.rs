//! Rendering primitives shared by every model type.
//!
//! Each entity appends its own fragment to an output buffer; parents
//! concatenate child fragments without reparsing them.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::models::Point;

/// Fewest decimal digits ever written for a coordinate value
pub const MIN_COORDINATE_PRECISION: usize = 6;

/// Options controlling how a document is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Decimal digits written after the point in coordinate triples
    pub coordinate_precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { coordinate_precision: MIN_COORDINATE_PRECISION }
    }
}

impl RenderOptions {
    /// Create options with the given coordinate precision, raised to the minimum if lower
    pub fn with_precision(precision: usize) -> Self {
        Self { coordinate_precision: precision.max(MIN_COORDINATE_PRECISION) }
    }

    /// Effective coordinate precision
    pub fn precision(&self) -> usize {
        self.coordinate_precision.max(MIN_COORDINATE_PRECISION)
    }
}

/// Anything that renders itself to a KML fragment
pub trait Render {
    /// Append this entity's fragment to `out`
    fn write_kml(&self, out: &mut String, options: &RenderOptions);

    /// Render the fragment with default options
    fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the fragment with explicit options
    fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        self.write_kml(&mut out, options);
        out
    }
}

/// Write `<tag>text</tag>` on its own line, escaping the text
pub(crate) fn write_text_element(out: &mut String, tag: &str, text: &str) {
    out.push_str(&format!("<{tag}>{}</{tag}>\n", escape(text)));
}

/// Write a `lon,lat,alt` triple in fixed-point notation (no trailing newline)
pub(crate) fn write_coordinate(out: &mut String, point: &Point, options: &RenderOptions) {
    let precision = options.precision();
    out.push_str(&format!(
        "{:.*},{:.*},{:.*}",
        precision,
        point.longitude(),
        precision,
        point.latitude(),
        precision,
        point.altitude()
    ));
}

/// Write a `<coordinates>` block listing one triple per line
pub(crate) fn write_coordinate_list<'a>(
    out: &mut String,
    points: impl IntoIterator<Item = &'a Point>,
    options: &RenderOptions,
) {
    out.push_str("<coordinates>\n");
    for point in points {
        write_coordinate(out, point, options);
        out.push('\n');
    }
    out.push_str("</coordinates>\n");
}
