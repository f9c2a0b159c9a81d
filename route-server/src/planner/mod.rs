//! Least-cost route finding.
//!
//! The path finder runs a Dijkstra search over a [`Graph`](crate::graph::Graph)
//! built for the query, charging extra for back-to-back line changes, and
//! reports the path with its cost, line changes and an estimated duration.

mod config;
mod search;


pub use config::RouteConfig;
pub use search::{LineChange, PathFinder, RouteResult, line_changes, plan_route, shortest_path};
