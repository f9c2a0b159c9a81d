//! Web layer for the route finder.
//!
//! Exposes the station list and route finding over HTTP as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, ServerConfig};
