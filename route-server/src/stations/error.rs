//! Station loading error types.

/// Errors that can occur while loading the station list.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a local station file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Authentication failed
    #[error("unauthorized: check STATIONS_API_KEY")]
    Unauthorized,

    /// Remote source returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Document is not a valid GeoJSON feature collection
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A feature could not be turned into a station
    #[error("invalid station record at feature {index}: {message}")]
    InvalidRecord { index: usize, message: String },
}
