//! Route graph construction.
//!
//! Connectivity is inferred purely from line labels and geometry: records
//! on the same line are joined by direct edges, records on different lines
//! that sit close together are joined by transfer edges.

mod adjacency;
mod builder;
mod edge;

pub use adjacency::Graph;
pub use builder::{DEFAULT_TRANSFER_PENALTY, GraphBuilder, build};
pub use edge::{Edge, EdgeKind};
