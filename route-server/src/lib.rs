//! Transit route finder server.
//!
//! Finds the least-cost path between two stations in a network of lines
//! that meet at interchanges. Connectivity is inferred from station
//! positions and line labels; the route graph is rebuilt for every query.

pub mod domain;
pub mod graph;
pub mod interchange;
pub mod planner;
pub mod stations;
pub mod web;
