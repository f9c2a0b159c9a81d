//! Weighted edges between stations.

/// How two stations are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Consecutive travel along one line, weighted by distance.
    Direct,
    /// A change between lines at an interchange, weighted by a fixed penalty.
    Transfer,
}

/// A directed, weighted edge in the route graph.
///
/// Direct edges have `from_line == to_line`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    cost: f64,
    kind: EdgeKind,
    from_line: String,
    to_line: String,
}

impl Edge {
    /// A same-line edge. Negative or non-finite costs become zero.
    pub fn direct(cost: f64, line: impl Into<String>) -> Self {
        let line = line.into();
        Self {
            cost: clamp_cost(cost),
            kind: EdgeKind::Direct,
            from_line: line.clone(),
            to_line: line,
        }
    }

    /// A line change from `from_line` to `to_line`. Negative or non-finite
    /// costs become zero.
    pub fn transfer(cost: f64, from_line: impl Into<String>, to_line: impl Into<String>) -> Self {
        Self {
            cost: clamp_cost(cost),
            kind: EdgeKind::Transfer,
            from_line: from_line.into(),
            to_line: to_line.into(),
        }
    }

    /// Non-negative traversal cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == EdgeKind::Transfer
    }

    /// Line of the record this edge leaves from.
    pub fn from_line(&self) -> &str {
        &self.from_line
    }

    /// Line of the record this edge arrives at.
    pub fn to_line(&self) -> &str {
        &self.to_line
    }

    /// Whether this edge should replace `existing` on the same node pair.
    ///
    /// Cheaper wins; on a tie a direct edge beats a transfer.
    pub(super) fn supersedes(&self, existing: &Edge) -> bool {
        self.cost < existing.cost
            || (self.cost == existing.cost
                && self.kind == EdgeKind::Direct
                && existing.kind == EdgeKind::Transfer)
    }
}

fn clamp_cost(cost: f64) -> f64 {
    if cost.is_finite() { cost.max(0.0) } else { 0.0 }
}
