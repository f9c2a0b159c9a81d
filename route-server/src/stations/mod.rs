//! Station list loading.
//!
//! Station records come from a GeoJSON feed, either a local file or a
//! remote URL, and are served to route queries through a short-lived
//! snapshot cache.

mod client;
mod error;
mod geojson;
mod store;

pub use client::{StationClient, StationClientConfig};
pub use error::StationError;
pub use geojson::parse_stations;
pub use store::{Snapshot, StationSource, StationStore, StationStoreConfig};
