//! Folders: ordered containers of heterogeneous features.

use crate::models::{Placemark, Style};
use crate::render::{write_text_element, Render, RenderOptions};

/// Anything a folder can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Placemark(Placemark),
    Style(Style),
    Folder(Folder),
}

impl From<Placemark> for Feature {
    fn from(placemark: Placemark) -> Self {
        Feature::Placemark(placemark)
    }
}

impl From<Style> for Feature {
    fn from(style: Style) -> Self {
        Feature::Style(style)
    }
}

impl From<Folder> for Feature {
    fn from(folder: Folder) -> Self {
        Feature::Folder(folder)
    }
}

impl Render for Feature {
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        match self {
            Feature::Placemark(placemark) => placemark.write_kml(out, options),
            Feature::Style(style) => style.write_kml(out, options),
            Feature::Folder(folder) => folder.write_kml(out, options),
        }
    }
}

/// A named folder; children render in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    name: String,
    description: String,
    features: Vec<Feature>,
}

impl Folder {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), features: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn add_feature(&mut self, feature: impl Into<Feature>) {
        self.features.push(feature.into());
    }

    /// Add a feature if present; `None` is dropped
    pub fn add_optional_feature<F: Into<Feature>>(&mut self, feature: Option<F>) {
        if let Some(feature) = feature {
            self.add_feature(feature);
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Placemarks in this folder and all nested folders, depth-first
    pub fn placemarks(&self) -> Vec<&Placemark> {
        let mut found = Vec::new();
        for feature in &self.features {
            match feature {
                Feature::Placemark(placemark) => found.push(placemark),
                Feature::Folder(folder) => found.extend(folder.placemarks()),
                Feature::Style(_) => {}
            }
        }
        found
    }

    /// Styles in this folder and all nested folders, depth-first
    pub fn styles(&self) -> Vec<&Style> {
        let mut found = Vec::new();
        for feature in &self.features {
            match feature {
                Feature::Style(style) => found.push(style),
                Feature::Folder(folder) => found.extend(folder.styles()),
                Feature::Placemark(_) => {}
            }
        }
        found
    }
}

impl Render for Folder {
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        out.push_str("<Folder>\n");
        write_text_element(out, "name", &self.name);
        write_text_element(out, "description", &self.description);

        for feature in &self.features {
            feature.write_kml(out, options);
        }

        out.push_str("</Folder>\n");
    }
}
