//! Integration tests for full document rendering
//!
//! These tests build complete trees through the public API and check the
//! rendered text end to end.

use chrono::{Duration, TimeZone, Utc};
use kmlgen_core::{Document, Folder, LineString, Placemark, Point, Polygon, Style};

const ENVELOPE_OPEN: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n";

#[test]
fn test_empty_document_is_bare_envelope() {
    let document = Document::new();
    assert_eq!(
        document.render(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n</kml>\n"
    );
}

#[test]
fn test_styled_placemark_document() {
    let mut folder = Folder::new("Test Folder", "This is a test folder");
    folder.add_feature(Style::new("S", 240, 0, 255, 0));

    let mut placemark =
        Placemark::new("Manhattan", "The Big Apple", Point::new(40.67, -73.9, 0.0).unwrap());
    placemark.set_style("S");
    folder.add_feature(placemark);

    let mut document = Document::new();
    document.add_folder(folder);
    let text = document.render();

    assert!(text.starts_with(ENVELOPE_OPEN));
    assert!(text.ends_with("</Folder>\n</kml>\n"));
    assert_eq!(text.matches("<Folder>").count(), 1);
    assert!(text.contains("<Style id=\"S\">"));
    assert_eq!(text.matches("<color>f000ff00</color>").count(), 3);
    assert!(text.contains("<styleUrl>#S</styleUrl>"));
    assert!(text.contains("<coordinates>-73.900000,40.670000,0.000000</coordinates>"));

    let style = text.find("<Style id=\"S\">").unwrap();
    let placemark = text.find("<Placemark>").unwrap();
    assert!(style < placemark);
}

#[test]
fn test_exact_folder_fragment() {
    let mut placemark = Placemark::new("P", "D", Point::new(1.0, 2.0, 3.0).unwrap());
    placemark.set_style("S");

    let mut folder = Folder::new("F", "Desc");
    folder.add_feature(placemark);

    let mut document = Document::new();
    document.add_folder(folder);

    let expected = format!(
        "{ENVELOPE_OPEN}<Folder>\n<name>F</name>\n<description>Desc</description>\n\
         <Placemark>\n<name>P</name>\n<description>D</description>\n<visibility>1</visibility>\n\
         <styleUrl>#S</styleUrl>\n<Point>\n<extrude>0</extrude>\n\
         <altitudeMode>clampToGround</altitudeMode>\n\
         <coordinates>2.000000,1.000000,3.000000</coordinates>\n</Point>\n</Placemark>\n\
         </Folder>\n</kml>\n"
    );
    assert_eq!(document.render(), expected);
}

#[test]
fn test_dangling_style_reference_renders() {
    let mut placemark = Placemark::new("Orphan", "", Point::new(0.0, 0.0, 0.0).unwrap());
    placemark.set_style("DoesNotExist");

    let mut folder = Folder::new("F", "");
    folder.add_feature(placemark);

    let mut document = Document::new();
    document.add_folder(folder);

    let text = document.render();
    assert!(text.contains("<styleUrl>#DoesNotExist</styleUrl>"));
    assert!(!text.contains("<Style "));
}

#[test]
fn test_city_tour_document() {
    let mut folder = Folder::new("Test Folder", "This is a test folder");

    let mut places = Style::new("PlaceStyle", 240, 0, 255, 0);
    places.set_icon_url("http://maps.google.com/mapfiles/kml/paddle/wht-circle.png");
    folder.add_feature(places);
    folder.add_feature(Style::new("FlightStyle", 240, 255, 0, 0));
    folder.add_feature(Style::new("StateStyle", 240, 0, 0, 255));

    let cities = [
        ("Manhattan", "The Big Apple", 40.67, -73.9),
        ("London", "The City", 51.51, 0.1275),
        ("Paris", "The City of Light", 48.85, 2.35),
        ("Tokyo", "東京", 35.69, 139.7),
    ];

    let mut flight_path = LineString::new();
    for (name, description, lat, lon) in cities {
        let point = Point::new(lat, lon, 0.0).unwrap();
        flight_path.add_point(point);

        let mut placemark = Placemark::new(name, description, point);
        placemark.set_style("PlaceStyle");
        folder.add_feature(placemark);
    }

    let mut placemark = Placemark::new("Flight Path", "", flight_path);
    placemark.set_style("FlightStyle");
    folder.add_feature(placemark);

    let mut colorado = Polygon::new();
    colorado.add_point(Point::new(41.071904, -101.868843, 0.0).ok());
    colorado.add_point(Point::new(36.926393, -101.868843, 0.0).ok());
    colorado.add_point(Point::new(36.926393, -109.279635, 0.0).ok());
    colorado.add_point(Point::new(41.071904, -109.279635, 0.0).ok());

    let end = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut placemark = Placemark::new("Colorado", "The Centennial State", colorado);
    placemark.set_style("StateStyle");
    placemark.set_time_span(end - Duration::hours(10), end);
    folder.add_feature(placemark);

    let mut document = Document::new();
    document.add_folder(folder);
    let text = document.render();

    assert_eq!(text.matches("<Placemark>").count(), 6);
    assert_eq!(text.matches("<Style id=").count(), 3);
    assert_eq!(text.matches("<styleUrl>#PlaceStyle</styleUrl>").count(), 4);
    assert!(text.contains("<description>東京</description>"));
    assert!(text.contains("<href>http://maps.google.com/mapfiles/kml/paddle/wht-circle.png</href>"));
    assert!(text.contains("<color>f00000ff</color>"));
    assert!(text.contains("<color>f0ff0000</color>"));

    assert!(text.contains(
        "<coordinates>\n-73.900000,40.670000,0.000000\n0.127500,51.510000,0.000000\n\
         2.350000,48.850000,0.000000\n139.700000,35.690000,0.000000\n</coordinates>\n"
    ));

    assert!(text.contains(
        "<coordinates>\n-101.868843,41.071904,0.000000\n-101.868843,36.926393,0.000000\n\
         -109.279635,36.926393,0.000000\n-109.279635,41.071904,0.000000\n\
         -101.868843,41.071904,0.000000\n</coordinates>\n"
    ));

    assert!(text.contains(
        "<TimeSpan>\n<begin>2024-06-01T02:00:00Z</begin>\n<end>2024-06-01T12:00:00Z</end>\n</TimeSpan>\n"
    ));

    assert_eq!(document.render(), text);
}

#[test]
fn test_nested_folders_and_degenerate_geometry() {
    let mut inner = Folder::new("Inner", "");
    let mut lonely = LineString::new();
    lonely.add_point(Point::new(1.0, 1.0, 0.0).ok());
    inner.add_feature(Placemark::new("Lonely", "", lonely));
    inner.add_feature(Placemark::new("Empty ring", "", Polygon::new()));

    let mut outer = Folder::new("Outer", "");
    outer.add_feature(inner);

    let mut document = Document::new();
    document.add_folder(outer);
    let text = document.render();

    assert_eq!(text.matches("<Folder>").count(), 2);
    assert!(text.contains("</Folder>\n</Folder>\n</kml>\n"));
    assert!(!text.contains("<LineString>"));
    assert!(!text.contains("<Polygon>"));
    assert_eq!(text.matches("<Placemark>").count(), 2);
}
