//! kmlgen Core - Document model and KML rendering
//!
//! This crate holds the in-memory document tree (folders, placemarks,
//! geometries and styles) and renders it to KML 2.2 text. It performs no I/O;
//! writing the rendered text anywhere is up to the caller.

pub mod error;
pub mod models;
pub mod render;
pub mod sync;

pub use error::{KmlError, Result};
pub use models::{
    Color, Document, Feature, Folder, Geometry, LineString, Placemark, Point, Polygon, Style,
    TimeSpan,
};
pub use render::{Render, RenderOptions};
pub use sync::Shared;
