//! Shared visual styles referenced by placemarks.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::render::{write_text_element, Render, RenderOptions};

/// Icon used when a style does not set one
pub const DEFAULT_ICON_URL: &str = "http://maps.google.com/mapfiles/kml/pushpin/ylw-pushpin.png";

/// Upper bound accepted for the icon scale
pub const MAX_ICON_SCALE: f64 = 100.0;

/// An ARGB color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self { alpha, red, green, blue }
    }

    /// Fully opaque color
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(u8::MAX, red, green, blue)
    }

    /// Hex encoding in KML channel order: `aabbggrr`
    pub fn to_kml_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.alpha, self.blue, self.green, self.red)
    }
}

/// A named style applied to placemarks through `styleUrl` references
///
/// The same color is used for the icon, the line, and the polygon fill.
/// Setters are best-effort: invalid input leaves the previous value in place
/// and the setter returns `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    id: String,
    color: Color,
    icon_url: String,
    icon_scale: f64,
    line_width: f64,
    fill: bool,
}

impl Style {
    /// Create a style; the identifier is trimmed
    pub fn new(id: impl AsRef<str>, alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            id: id.as_ref().trim().to_string(),
            color: Color::new(alpha, red, green, blue),
            icon_url: DEFAULT_ICON_URL.to_string(),
            icon_scale: 1.0,
            line_width: 1.0,
            fill: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn icon_scale(&self) -> f64 {
        self.icon_scale
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the icon URL; blank URLs are ignored
    pub fn set_icon_url(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            tracing::debug!(style = %self.id, "Ignoring blank icon URL");
            return false;
        }

        self.icon_url = url.to_string();
        true
    }

    /// Set the icon scale; values outside `[0, 100]` are ignored
    pub fn set_icon_scale(&mut self, scale: f64) -> bool {
        if !(0.0..=MAX_ICON_SCALE).contains(&scale) {
            tracing::debug!(style = %self.id, scale, "Ignoring out-of-range icon scale");
            return false;
        }

        self.icon_scale = scale;
        true
    }

    /// Set the line width; must be finite and positive
    pub fn set_line_width(&mut self, width: f64) -> bool {
        if !width.is_finite() || width <= 0.0 {
            tracing::debug!(style = %self.id, width, "Ignoring invalid line width");
            return false;
        }

        self.line_width = width;
        true
    }

    pub fn set_fill(&mut self, fill: bool) {
        self.fill = fill;
    }
}

impl Render for Style {
    fn write_kml(&self, out: &mut String, _options: &RenderOptions) {
        let color = format!("<color>{}</color>\n", self.color.to_kml_hex());

        out.push_str(&format!("<Style id=\"{}\">\n", escape(self.id.as_str())));

        out.push_str("<IconStyle>\n");
        out.push_str(&color);
        out.push_str(&format!("<scale>{}</scale>\n", self.icon_scale));
        out.push_str("<Icon>\n");
        write_text_element(out, "href", &self.icon_url);
        out.push_str("</Icon>\n");
        out.push_str("</IconStyle>\n");

        out.push_str("<LineStyle>\n");
        out.push_str(&color);
        out.push_str(&format!("<width>{}</width>\n", self.line_width));
        out.push_str("</LineStyle>\n");

        out.push_str("<PolyStyle>\n");
        out.push_str(&color);
        out.push_str(&format!("<fill>{}</fill>\n", u8::from(self.fill)));
        out.push_str("</PolyStyle>\n");

        out.push_str("</Style>\n");
    }
}
