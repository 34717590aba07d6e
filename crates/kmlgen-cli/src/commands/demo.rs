//! Demo command: a sample document built directly through the core API

use super::{load_config, write_document};
use crate::cli::DemoArgs;
use crate::output::OutputWriter;
use crate::scene::BuildReport;
use anyhow::Result;
use chrono::{Duration, Utc};
use kmlgen_core::{Document, Folder, LineString, Placemark, Point, Polygon, Style};
use std::path::Path;

const CITIES: [(&str, &str, f64, f64); 4] = [
    ("Manhattan", "The Big Apple", 40.67, -73.9),
    ("London", "The City", 51.51, 0.1275),
    ("Paris", "The City of Light", 48.85, 2.35),
    ("Tokyo", "東京", 35.69, 139.7),
];

const COLORADO: [(f64, f64); 4] = [
    (41.071904, -101.868843),
    (36.926393, -101.868843),
    (36.926393, -109.279635),
    (41.071904, -109.279635),
];

pub fn execute(args: DemoArgs, config_path: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let config = load_config(config_path, &args.output)?;
    let document = sample_document(&config.default_icon_url.value);
    write_document(&document, BuildReport::default(), &config, &args.output, output)
}

/// Three styles, four cities, the flight path between them, and Colorado
pub fn sample_document(default_icon_url: &str) -> Document {
    let mut folder = Folder::new("Test Folder", "This is a test folder");

    let mut places = Style::new("PlaceStyle", 240, 0, 255, 0);
    places.set_icon_url("http://maps.google.com/mapfiles/kml/paddle/wht-circle.png");
    folder.add_feature(places);

    for (id, red, green, blue) in [("FlightStyle", 255, 0, 0), ("StateStyle", 0, 0, 255)] {
        let mut style = Style::new(id, 240, red, green, blue);
        style.set_icon_url(default_icon_url);
        folder.add_feature(style);
    }

    let mut flight_path = LineString::new();
    for (name, description, lat, lon) in CITIES {
        let Ok(point) = Point::new(lat, lon, 0.0) else {
            continue;
        };
        flight_path.add_point(point);

        let mut placemark = Placemark::new(name, description, point);
        placemark.set_style("PlaceStyle");
        folder.add_feature(placemark);
    }

    let mut placemark = Placemark::new("Flight Path", "", flight_path);
    placemark.set_style("FlightStyle");
    folder.add_feature(placemark);

    let mut colorado = Polygon::new();
    for (lat, lon) in COLORADO {
        colorado.add_point(Point::new(lat, lon, 0.0).ok());
    }

    let now = Utc::now();
    let mut placemark = Placemark::new("Colorado", "The Centennial State", colorado);
    placemark.set_style("StateStyle");
    placemark.set_time_span(now - Duration::hours(10), now);
    folder.add_feature(placemark);

    let mut document = Document::new();
    document.add_folder(folder);
    document
}
