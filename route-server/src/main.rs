use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_server::planner::RouteConfig;
use route_server::stations::{
    StationClient, StationClientConfig, StationSource, StationStore, StationStoreConfig,
};
use route_server::web::{AppState, ServerConfig, create_router};

/// Default station file when no URL is configured.
const DEFAULT_STATIONS_PATH: &str = "data.json";

/// Read an environment variable and parse it, warning on bad values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}

fn station_source() -> StationSource {
    match std::env::var("STATIONS_URL") {
        Ok(url) => {
            let mut config = StationClientConfig::new(url);
            if let Ok(key) = std::env::var("STATIONS_API_KEY") {
                config = config.with_api_key(key);
            }
            let client = StationClient::new(config).expect("Failed to create station client");
            StationSource::Http(client)
        }
        Err(_) => {
            let path = std::env::var("STATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_STATIONS_PATH.to_string());
            StationSource::File(PathBuf::from(path))
        }
    }
}

fn route_config() -> RouteConfig {
    let mut config = RouteConfig::default();
    if let Some(radius) = env_parse("TRANSFER_RADIUS_KM") {
        config = config.with_transfer_radius_km(radius);
    }
    if let Some(penalty) = env_parse("TRANSFER_PENALTY") {
        config = config.with_transfer_penalty(penalty);
    }
    config
}

fn server_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    if let Some(addr) = env_parse::<SocketAddr>("BIND_ADDR") {
        config.addr = addr;
    } else if let Some(port) = env_parse::<u16>("PORT") {
        config.addr.set_port(port);
    }
    config
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,route_server=debug")),
        )
        .init();

    let mut store_config = StationStoreConfig::default();
    if let Some(secs) = env_parse::<u64>("STATIONS_CACHE_SECS") {
        store_config.ttl = Duration::from_secs(secs);
    }

    let source = station_source();
    info!(source = %source.describe(), "using station source");
    let stations = StationStore::new(source, &store_config);

    // Fail fast if the station list is unavailable at startup
    let snapshot = stations
        .snapshot()
        .await
        .expect("Failed to load station list");
    info!(stations = snapshot.len(), "station list ready");

    let state = AppState::new(stations, route_config());
    let app = create_router(state);

    let addr = server_config().addr;
    info!("Metro route finder listening on http://{addr}");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/routes/stations  - List stations");
    info!("  GET  /api/routes/find      - Find a route (?start=..&end=..)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
