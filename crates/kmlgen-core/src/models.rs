pub mod document;
pub mod folder;
pub mod geometry;
pub mod placemark;
pub mod point;
pub mod style;

pub use document::Document;
pub use folder::{Feature, Folder};
pub use geometry::{Geometry, LineString, Polygon};
pub use placemark::{Placemark, TimeSpan};
pub use point::Point;
pub use style::{Color, Style};
