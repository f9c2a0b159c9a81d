//! Geographic positions and great-circle distance.

use std::fmt;

/// Mean Earth radius used for all distance calculations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing a position from invalid coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid position ({lon}, {lat}): {reason}")]
pub struct InvalidPosition {
    lon: f64,
    lat: f64,
    reason: &'static str,
}

/// A (longitude, latitude) pair in decimal degrees.
///
/// Coordinates are finite and within their geographic ranges by
/// construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::Position;
///
/// let taksim = Position::new(28.9869, 41.0369).unwrap();
/// assert_eq!(taksim.lon(), 28.9869);
///
/// // Latitude out of range
/// assert!(Position::new(28.9, 91.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Position {
    lon: f64,
    lat: f64,
}

impl Position {
    /// Create a position from longitude and latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidPosition> {
        let invalid = |reason| InvalidPosition { lon, lat, reason };

        if !lon.is_finite() || !lat.is_finite() {
            return Err(invalid("coordinates must be finite"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }

        Ok(Self { lon, lat })
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &Position) -> f64 {
        haversine_km(*self, *other)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.lon, self.lat)
    }
}

/// Haversine distance between two positions in kilometres.
pub fn haversine_km(a: Position, b: Position) -> f64 {
    let (lat_a, lat_b) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
