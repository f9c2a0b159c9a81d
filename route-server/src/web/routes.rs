//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::plan_route;
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health))
        .route("/api/routes/stations", get(list_stations))
        .route("/api/routes/find", get(find_route))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Service name and version.
async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Metro Route Finder API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// List every station record.
async fn list_stations(State(state): State<AppState>) -> Result<Json<StationsResponse>, AppError> {
    let stations = state.stations.snapshot().await?;

    Ok(Json(StationsResponse {
        success: true,
        stations: stations.iter().map(StationDto::from_station).collect(),
    }))
}

/// Find the least-cost route between two named stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<FindRouteRequest>,
) -> Result<Json<FindRouteResponse>, AppError> {
    let (start, end) = req.endpoints().ok_or_else(|| AppError::BadRequest {
        message: "start and end stations are required".to_string(),
    })?;

    let stations = state.stations.snapshot().await?;

    // The engine cannot tell an unknown name from a disconnected one
    for name in [&start, &end] {
        if !stations.iter().any(|s| s.name() == name.as_str()) {
            return Err(AppError::NotFound {
                message: format!("unknown station: {name}"),
            });
        }
    }

    let config = state.config.clone();
    let (from, to) = (start.clone(), end.clone());
    let result = tokio::task::spawn_blocking(move || plan_route(&config, &stations, &from, &to))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("route computation failed: {e}"),
        })?;

    let route = RouteDto::from_result(&result).ok_or_else(|| AppError::NotFound {
        message: format!("no route between {start} and {end}"),
    })?;

    Ok(Json(FindRouteResponse {
        success: true,
        route,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<Arc<StationError>> for AppError {
    fn from(e: Arc<StationError>) -> Self {
        AppError::Internal {
            message: format!("failed to load stations: {e}"),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            success: false,
            message,
        });
        (status, body).into_response()
    }
}
