//! The top-level KML document.

use crate::models::Folder;
use crate::render::{Render, RenderOptions};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// A KML document: an ordered list of folders wrapped in the `<kml>` envelope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    folders: Vec<Folder>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_folder(&mut self, folder: Folder) {
        self.folders.push(folder);
    }

    /// Add a folder if present; `None` is dropped
    pub fn add_optional_folder(&mut self, folder: Option<Folder>) {
        if let Some(folder) = folder {
            self.add_folder(folder);
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Render the complete document with default options
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the complete document
    ///
    /// Never fails: an empty document renders the bare envelope.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push_str(&format!("<kml xmlns=\"{KML_NAMESPACE}\">\n"));

        for folder in &self.folders {
            folder.write_kml(&mut out, options);
        }

        out.push_str("</kml>\n");

        tracing::debug!(folders = self.folders.len(), bytes = out.len(), "Rendered KML document");
        out
    }
}
