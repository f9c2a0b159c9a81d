//! Cost model configuration for route finding.

use crate::graph::{DEFAULT_TRANSFER_PENALTY, GraphBuilder};
use crate::interchange::{DEFAULT_TRANSFER_RADIUS_KM, WithinRadius};

/// Tunable constants of the cost model.
///
/// Graph costs are in kilometres for direct edges and in penalty units for
/// transfers; the two are summed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// Cost of a transfer edge.
    pub transfer_penalty: f64,

    /// Extra cost when a transfer follows an edge from a different line.
    pub transfer_surcharge: f64,

    /// Maximum distance between records on different lines for them
    /// to count as an interchange (km).
    pub transfer_radius_km: f64,

    /// Average train speed used for the duration estimate (km/h).
    pub average_speed_kmh: f64,

    /// Dwell time added per stop along the path (minutes).
    pub station_stop_mins: f64,

    /// Time added per line change (minutes).
    pub transfer_mins: f64,
}

impl RouteConfig {
    pub fn with_transfer_penalty(mut self, penalty: f64) -> Self {
        self.transfer_penalty = penalty;
        self
    }

    pub fn with_transfer_surcharge(mut self, surcharge: f64) -> Self {
        self.transfer_surcharge = surcharge;
        self
    }

    pub fn with_transfer_radius_km(mut self, radius_km: f64) -> Self {
        self.transfer_radius_km = radius_km;
        self
    }

    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    /// The interchange policy described by this configuration.
    pub fn proximity(&self) -> WithinRadius {
        WithinRadius::new(self.transfer_radius_km)
    }

    /// A graph builder using this configuration's penalty and radius.
    pub fn graph_builder(&self) -> GraphBuilder<WithinRadius> {
        GraphBuilder::new(self.proximity(), self.transfer_penalty)
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            transfer_penalty: DEFAULT_TRANSFER_PENALTY,
            transfer_surcharge: 5.0,
            transfer_radius_km: DEFAULT_TRANSFER_RADIUS_KM,
            average_speed_kmh: 40.0,
            station_stop_mins: 0.5,
            transfer_mins: 5.0,
        }
    }
}
