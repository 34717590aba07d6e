//! Validated geographic positions.

use crate::error::{KmlError, Result};
use crate::render::{write_coordinate, Render, RenderOptions};

/// A position on the Earth: WGS 84 degrees plus altitude in meters
///
/// Latitude and longitude are validated on construction; a point that exists
/// is always in range. Points compare by value, which is what polygon ring
/// closure relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl Point {
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Create a point, rejecting non-finite or out-of-range latitude/longitude
    ///
    /// A non-finite altitude is not an error: it is replaced with 0.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        if !latitude.is_finite() || latitude.abs() > Self::MAX_LATITUDE {
            return Err(KmlError::InvalidLatitude { value: latitude });
        }

        if !longitude.is_finite() || longitude.abs() > Self::MAX_LONGITUDE {
            return Err(KmlError::InvalidLongitude { value: longitude });
        }

        let altitude = if altitude.is_finite() {
            altitude
        } else {
            tracing::debug!(latitude, longitude, altitude, "Non-finite altitude replaced with 0");
            0.0
        };

        Ok(Self { latitude, longitude, altitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

impl Render for Point {
    fn write_kml(&self, out: &mut String, options: &RenderOptions) {
        out.push_str("<Point>\n");
        out.push_str("<extrude>0</extrude>\n");
        out.push_str("<altitudeMode>clampToGround</altitudeMode>\n");
        out.push_str("<coordinates>");
        write_coordinate(out, self, options);
        out.push_str("</coordinates>\n");
        out.push_str("</Point>\n");
    }
}
