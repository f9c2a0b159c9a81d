//! Cached access to the current station list.
//!
//! Every route query builds its graph from a fresh snapshot of the station
//! list. Loading the list is the expensive part, so the parsed snapshot is
//! kept for a short TTL. The graph built from it is never cached.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::info;

use crate::domain::Station;

use super::client::StationClient;
use super::error::StationError;
use super::geojson::parse_stations;

/// A shared, immutable station list.
pub type Snapshot = Arc<Vec<Station>>;

/// Where the station list comes from.
#[derive(Debug, Clone)]
pub enum StationSource {
    /// A GeoJSON file on local disk.
    File(PathBuf),
    /// A GeoJSON document served over HTTP.
    Http(StationClient),
}

impl StationSource {
    /// Load and parse the full station list.
    pub async fn load(&self) -> Result<Vec<Station>, StationError> {
        match self {
            StationSource::File(path) => {
                let body =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| StationError::Io {
                            path: path.display().to_string(),
                            source,
                        })?;
                parse_stations(&body)
            }
            StationSource::Http(client) => client.fetch_all().await,
        }
    }

    /// Human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            StationSource::File(path) => format!("file {}", path.display()),
            StationSource::Http(client) => format!("url {}", client.url()),
        }
    }
}

/// Configuration for the station store.
#[derive(Debug, Clone)]
pub struct StationStoreConfig {
    /// How long a loaded snapshot is reused.
    pub ttl: Duration,
}

impl Default for StationStoreConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
        }
    }
}

/// Station list with a short-lived snapshot cache.
///
/// Concurrent callers that miss the cache share a single load.
#[derive(Clone)]
pub struct StationStore {
    source: Arc<StationSource>,
    snapshot: MokaCache<(), Snapshot>,
}

impl StationStore {
    /// Create a store reading from `source`.
    pub fn new(source: StationSource, config: &StationStoreConfig) -> Self {
        let snapshot = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self {
            source: Arc::new(source),
            snapshot,
        }
    }

    /// The current station list, loading it if the cached copy expired.
    pub async fn snapshot(&self) -> Result<Snapshot, Arc<StationError>> {
        let source = self.source.clone();
        self.snapshot
            .try_get_with((), async move {
                let stations = source.load().await?;
                info!(
                    stations = stations.len(),
                    source = %source.describe(),
                    "loaded station list"
                );
                Ok::<_, StationError>(Arc::new(stations))
            })
            .await
    }

    /// Drop the cached snapshot so the next call reloads.
    pub async fn invalidate(&self) {
        self.snapshot.invalidate(&()).await;
    }
}
