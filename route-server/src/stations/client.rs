//! HTTP client for a remote station feed.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::Station;

use super::error::StationError;
use super::geojson::parse_stations;

/// Configuration for the station feed client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL of the GeoJSON station document
    pub url: String,
    /// Optional API key sent in the `x-apikey` header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout_secs: 30,
        }
    }

    /// Authenticate requests with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for a remote GeoJSON station feed.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new station feed client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| StationError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse every station in the feed.
    pub async fn fetch_all(&self) -> Result<Vec<Station>, StationError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StationError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_stations(&body)
    }
}
