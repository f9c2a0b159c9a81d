//! Parsing of the GeoJSON station feed.
//!
//! The feed is a `FeatureCollection` of `Point` features, one per station
//! record, with the station name, line, project phase and operating
//! department in the feature properties.

use geojson::{Feature, GeoJson, JsonValue, Value};
use tracing::warn;

use crate::domain::{Position, Station};

use super::error::StationError;

const NAME: &str = "ISTASYON";
const LINE: &str = "PROJE_ADI";
const STATUS: &str = "PROJE_ASAMA";
const DEPARTMENT: &str = "MUDURLUK";

/// Parse a station feed into station records.
///
/// Features without point geometry, or without a text name and line, are
/// skipped. Status and department that are not text are dropped. Features
/// with unusable coordinates fail the whole document.
pub fn parse_stations(body: &str) -> Result<Vec<Station>, StationError> {
    let document: GeoJson = body.parse().map_err(|e: geojson::Error| StationError::Json {
        message: e.to_string(),
    })?;
    let GeoJson::FeatureCollection(collection) = document else {
        return Err(StationError::Json {
            message: "expected a FeatureCollection".to_string(),
        });
    };

    let mut stations = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.iter().enumerate() {
        let Some(Value::Point(coords)) = feature.geometry.as_ref().map(|g| &g.value) else {
            warn!(index, "skipping feature without point geometry");
            continue;
        };

        let (Ok(Some(name)), Ok(Some(line))) = (text(feature, NAME), text(feature, LINE)) else {
            warn!(index, "skipping feature without station name or line");
            continue;
        };

        let invalid = |message: String| StationError::InvalidRecord { index, message };

        let &[lon, lat, ..] = coords.as_slice() else {
            return Err(invalid("point needs longitude and latitude".to_string()));
        };

        let position = Position::new(lon, lat).map_err(|e| invalid(e.to_string()))?;
        let mut station = Station::new(name, position, line).map_err(|e| invalid(e.to_string()))?;

        if let Some(status) = metadata(feature, index, STATUS) {
            station = station.with_status(status);
        }
        if let Some(department) = metadata(feature, index, DEPARTMENT) {
            station = station.with_department(department);
        }

        stations.push(station);
    }

    Ok(stations)
}

/// A trimmed, non-blank text property. `Err` holds a present value that
/// is not text.
fn text<'f>(feature: &'f Feature, key: &str) -> Result<Option<&'f str>, &'f JsonValue> {
    match feature.property(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.trim()).filter(|s| !s.is_empty())),
        Some(other) => Err(other),
    }
}

fn metadata<'f>(feature: &'f Feature, index: usize, key: &str) -> Option<&'f str> {
    text(feature, key).unwrap_or_else(|value| {
        warn!(index, key, %value, "ignoring station metadata that is not text");
        None
    })
}
