//! Application state for the web layer.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::planner::RouteConfig;
use crate::stations::StationStore;

/// Shared application state.
///
/// Holds only read-only configuration and the station store. Each route
/// query takes its own snapshot and builds its own graph.
#[derive(Clone)]
pub struct AppState {
    /// Station list source with snapshot cache
    pub stations: StationStore,

    /// Route cost model
    pub config: Arc<RouteConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationStore, config: RouteConfig) -> Self {
        Self {
            stations,
            config: Arc::new(config),
        }
    }
}

/// Server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
