//! Named features binding a geometry to an optional style.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;

use crate::models::Geometry;
use crate::render::{write_text_element, Render, RenderOptions};

/// Time interval a placemark is visible for
///
/// Bounds are emitted in the order given; `begin <= end` is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSpan {
    pub fn new(begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { begin, end }
    }
}

impl Render for TimeSpan {
    fn write_kml(&self, out: &mut String, _options: &RenderOptions) {
        out.push_str("<TimeSpan>\n");
        write_text_element(out, "begin", &self.begin.to_rfc3339_opts(SecondsFormat::Secs, true));
        write_text_element(out, "end", &self.end.to_rfc3339_opts(SecondsFormat::Secs, true));
        out.push_str("</TimeSpan>\n");
    }
}

/// A named, described geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    name: String,
    description: String,
    geometry: Geometry,
    style_id: Option<String>,
    time_span: Option<TimeSpan>,
}

impl Placemark {
    /// Create a placemark. Polygon rings are closed when the placemark takes ownership.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        geometry: impl Into<Geometry>,
    ) -> Self {
        let mut geometry = geometry.into();
        geometry.normalize();

        Self {
            name: name.into(),
            description: description.into(),
            geometry,
            style_id: None,
            time_span: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Identifier of the referenced style, if any
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }

    /// The `#id` reference emitted in `styleUrl`
    pub fn style_url(&self) -> Option<String> {
        self.style_id.as_ref().map(|id| format!("#{id}"))
    }

    pub fn time_span(&self) -> Option<&TimeSpan> {
        self.time_span.as_ref()
    }

    /// Reference a style by identifier; blank identifiers are ignored
    ///
    /// The identifier is not checked against the styles in the document.
    pub fn set_style(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            tracing::debug!(placemark = %self.name, "Ignoring blank style reference");
            return false;
        }

        self.style_id = Some(id.to_string());
        true
    }

    pub fn set_time_span(&mut self, begin: DateTime<Utc>, end: DateTime<Utc>) {
        self.time_span = Some(TimeSpan::new(begin, end));
    }
}

impl Render for Placemark {
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        out.push_str("<Placemark>\n");
        write_text_element(out, "name", &self.name);
        write_text_element(out, "description", &self.description);
        out.push_str("<visibility>1</visibility>\n");

        if let Some(id) = &self.style_id {
            out.push_str(&format!("<styleUrl>#{}</styleUrl>\n", escape(id.as_str())));
        }

        if let Some(span) = &self.time_span {
            span.write_kml(out, options);
        }

        self.geometry.write_kml(out, options);
        out.push_str("</Placemark>\n");
    }
}
