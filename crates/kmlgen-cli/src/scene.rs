//! Scene files: serde descriptions of a document, built through the core API
//!
//! A scene is TOML or JSON. Every point goes through `Point::new`, so invalid
//! positions are reported and skipped rather than rendered.

use crate::errors::CliError;
use chrono::{DateTime, Utc};
use kmlgen_core::{
    Color, Document, Feature, Folder, Geometry, LineString, Placemark, Point, Polygon, Style,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub folders: Vec<SceneFolder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFolder {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<SceneFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneFeature {
    Style(SceneStyle),
    Placemark(ScenePlacemark),
    Folder(SceneFolder),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneStyle {
    pub id: String,
    pub color: Color,
    pub icon_url: Option<String>,
    pub icon_scale: Option<f64>,
    pub line_width: Option<f64>,
    #[serde(default)]
    pub fill: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenePlacemark {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub style: Option<String>,
    pub time_span: Option<SceneTimeSpan>,
    pub geometry: SceneGeometry,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneTimeSpan {
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenePoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub alt: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneGeometry {
    Point(ScenePoint),
    LineString { points: Vec<ScenePoint> },
    Polygon { points: Vec<ScenePoint> },
}

/// Counts collected while building a document from a scene
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub skipped_points: usize,
    pub skipped_placemarks: usize,
}

/// Read a scene file, choosing the parser by extension
pub fn load_scene(path: &Path) -> Result<Scene, CliError> {
    let content = fs::read_to_string(path)
        .map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;

    let extension =
        path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();

    match extension.as_str() {
        "toml" => toml::from_str(&content)
            .map_err(|e| CliError::Parse { path: path.to_path_buf(), reason: e.to_string() }),
        "json" => serde_json::from_str(&content)
            .map_err(|e| CliError::Parse { path: path.to_path_buf(), reason: e.to_string() }),
        _ => Err(CliError::UnsupportedFormat { extension }),
    }
}

/// Builds a document from a scene, applying the configured default icon
pub struct SceneBuilder<'a> {
    default_icon_url: &'a str,
    report: BuildReport,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(default_icon_url: &'a str) -> Self {
        Self { default_icon_url, report: BuildReport::default() }
    }

    pub fn build(mut self, scene: &Scene) -> (Document, BuildReport) {
        let mut document = Document::new();
        for folder in &scene.folders {
            document.add_folder(self.folder(folder));
        }
        (document, self.report)
    }

    fn folder(&mut self, scene: &SceneFolder) -> Folder {
        let mut folder = Folder::new(&scene.name, &scene.description);
        for feature in &scene.features {
            folder.add_optional_feature(self.feature(feature));
        }
        folder
    }

    fn feature(&mut self, scene: &SceneFeature) -> Option<Feature> {
        match scene {
            SceneFeature::Style(style) => Some(self.style(style).into()),
            SceneFeature::Placemark(placemark) => self.placemark(placemark).map(Feature::from),
            SceneFeature::Folder(folder) => Some(self.folder(folder).into()),
        }
    }

    fn style(&self, scene: &SceneStyle) -> Style {
        let Color { alpha, red, green, blue } = scene.color;
        let mut style = Style::new(&scene.id, alpha, red, green, blue);

        let icon_url = scene.icon_url.as_deref().unwrap_or(self.default_icon_url);
        if !style.set_icon_url(icon_url) {
            tracing::warn!(style = %scene.id, "Blank icon URL ignored");
        }

        if let Some(scale) = scene.icon_scale {
            if !style.set_icon_scale(scale) {
                tracing::warn!(style = %scene.id, scale, "Icon scale outside [0, 100] ignored");
            }
        }

        if let Some(width) = scene.line_width {
            if !style.set_line_width(width) {
                tracing::warn!(style = %scene.id, width, "Invalid line width ignored");
            }
        }

        style.set_fill(scene.fill);
        style
    }

    fn placemark(&mut self, scene: &ScenePlacemark) -> Option<Placemark> {
        let geometry: Geometry = match &scene.geometry {
            SceneGeometry::Point(point) => match self.point(point) {
                Some(point) => point.into(),
                None => {
                    tracing::warn!(
                        placemark = %scene.name,
                        "Skipping placemark without a valid point"
                    );
                    self.report.skipped_placemarks += 1;
                    return None;
                }
            },
            SceneGeometry::LineString { points } => {
                let mut line = LineString::new();
                for point in points {
                    line.add_point(self.point(point));
                }
                line.into()
            }
            SceneGeometry::Polygon { points } => {
                let mut polygon = Polygon::new();
                for point in points {
                    polygon.add_point(self.point(point));
                }
                polygon.into()
            }
        };

        let mut placemark = Placemark::new(&scene.name, &scene.description, geometry);

        if let Some(style) = &scene.style {
            if !placemark.set_style(style) {
                tracing::warn!(placemark = %scene.name, "Blank style reference ignored");
            }
        }

        if let Some(span) = scene.time_span {
            placemark.set_time_span(span.begin, span.end);
        }

        Some(placemark)
    }

    fn point(&mut self, scene: &ScenePoint) -> Option<Point> {
        match Point::new(scene.lat, scene.lon, scene.alt) {
            Ok(point) => Some(point),
            Err(e) => {
                tracing::warn!("Skipping point: {}", e);
                self.report.skipped_points += 1;
                None
            }
        }
    }
}
