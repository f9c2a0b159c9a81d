//! Domain types for the transit route finder.
//!
//! Types validate their invariants at construction time, so the graph
//! builder and path finder can trust every record they receive.

mod position;
mod station;

pub use position::{EARTH_RADIUS_KM, InvalidPosition, Position, haversine_km};
pub use station::{InvalidStation, Station};
