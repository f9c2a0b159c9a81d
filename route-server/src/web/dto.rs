//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire to match existing map clients.

use geojson::{Geometry, Value};
use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::{LineChange, RouteResult};

/// Query parameters for route finding.
#[derive(Debug, Default, Deserialize)]
pub struct FindRouteRequest {
    /// Start station name
    pub start: Option<String>,

    /// End station name
    pub end: Option<String>,
}

impl FindRouteRequest {
    /// Both station names as given, or `None` if either is missing or blank.
    pub fn endpoints(&self) -> Option<(String, String)> {
        let present = |s: &Option<String>| {
            s.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        Some((present(&self.start)?, present(&self.end)?))
    }
}

/// A station record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationDto {
    pub name: String,
    pub line: String,
    /// GeoJSON point, `[longitude, latitude]`
    pub coordinates: Geometry,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// A line change along a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChangeDto {
    pub station: String,
    pub from_line: String,
    pub to_line: String,
}

/// A found route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    /// Stations from start to end
    pub path: Vec<StationDto>,

    /// Total route cost
    pub distance: f64,

    pub number_of_stations: usize,

    pub transfers: Vec<LineChangeDto>,

    /// Estimated travel time in minutes
    pub estimated_time: i64,
}

/// Response for route finding.
#[derive(Debug, Serialize)]
pub struct FindRouteResponse {
    pub success: bool,
    pub route: RouteDto,
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub success: bool,
    pub stations: Vec<StationDto>,
}

/// Service banner.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

// Conversion implementations

impl StationDto {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        let position = station.position();
        Self {
            name: station.name().to_string(),
            line: station.line().to_string(),
            coordinates: Geometry::new(Value::Point(vec![position.lon(), position.lat()])),
            status: station.status().map(str::to_string),
            department: station.department().map(str::to_string),
        }
    }
}

impl LineChangeDto {
    pub fn from_change(change: &LineChange) -> Self {
        Self {
            station: change.station.clone(),
            from_line: change.from_line.clone(),
            to_line: change.to_line.clone(),
        }
    }
}

impl RouteDto {
    /// Create from a route result. `None` if the result is unreachable.
    pub fn from_result(result: &RouteResult) -> Option<Self> {
        if !result.is_reachable() {
            return None;
        }

        Some(Self {
            path: result.path.iter().map(StationDto::from_station).collect(),
            distance: result.total_cost,
            number_of_stations: result.number_of_stations(),
            transfers: result
                .transfers
                .iter()
                .map(LineChangeDto::from_change)
                .collect(),
            estimated_time: result.estimated_duration_mins?,
        })
    }
}
