//! Geometry variants a placemark can carry.

use crate::models::Point;
use crate::render::{write_coordinate_list, Render, RenderOptions};

/// The closed set of geometries a placemark can carry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
}

impl Geometry {
    /// KML element name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
        }
    }

    /// Bring stored data into its canonical form (closes polygon rings)
    pub(crate) fn normalize(&mut self) {
        if let Geometry::Polygon(polygon) = self {
            polygon.close_ring();
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl Render for Geometry {
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        match self {
            Geometry::Point(point) => point.write_kml(out, options),
            Geometry::LineString(line) => line.write_kml(out, options),
            Geometry::Polygon(polygon) => polygon.write_kml(out, options),
        }
    }
}

/// An open path through points in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point; `None` is ignored
    pub fn add_point(&mut self, point: impl Into<Option<Point>>) {
        if let Some(point) = point.into() {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl Render for LineString {
    /// Paths with fewer than two points render nothing.
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        if self.points.len() < 2 {
            return;
        }

        out.push_str("<LineString>\n");
        out.push_str("<extrude>0</extrude>\n");
        out.push_str("<tessellate>1</tessellate>\n");
        out.push_str("<altitudeMode>clampToGround</altitudeMode>\n");
        write_coordinate_list(out, &self.points, options);
        out.push_str("</LineString>\n");
    }
}

/// A polygon described by its outer boundary ring
///
/// A ring is closed when its first and last points are equal. Rendering always
/// emits a closed ring; `close_ring` makes the closure part of the stored
/// sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point to the ring; `None` is ignored
    pub fn add_point(&mut self, point: impl Into<Option<Point>>) {
        if let Some(point) = point.into() {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stored ring already ends on its first point
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => true,
        }
    }

    /// Append the first point if the ring is open. Returns whether a point was added.
    pub fn close_ring(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }

        let first = self.points[0];
        self.points.push(first);
        true
    }

    fn closing_point(&self) -> Option<&Point> {
        if self.is_closed() {
            None
        } else {
            self.points.first()
        }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl Render for Polygon {
    /// Empty polygons render nothing; open rings are emitted closed.
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        if self.points.is_empty() {
            return;
        }

        out.push_str("<Polygon>\n");
        out.push_str("<extrude>0</extrude>\n");
        out.push_str("<tessellate>1</tessellate>\n");
        out.push_str("<altitudeMode>clampToGround</altitudeMode>\n");
        out.push_str("<outerBoundaryIs>\n");
        out.push_str("<LinearRing>\n");
        write_coordinate_list(out, self.points.iter().chain(self.closing_point()), options);
        out.push_str("</LinearRing>\n");
        out.push_str("</outerBoundaryIs>\n");
        out.push_str("</Polygon>\n");
    }
}
