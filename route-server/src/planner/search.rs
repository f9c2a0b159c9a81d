//! Least-cost path search over the route graph.
//!
//! A Dijkstra search where the cost of a transfer edge depends on the edge
//! used to reach its source: changing lines straight after arriving from a
//! different line costs an extra surcharge, so back-to-back interchanges
//! compound instead of being charged once.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::Station;
use crate::graph::{Edge, Graph};

use super::config::RouteConfig;

/// A point on a path where the line changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// Station at which the new line is joined.
    pub station: String,
    pub from_line: String,
    pub to_line: String,
}

/// Outcome of one route query.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Station records from start to end inclusive. Empty if unreachable.
    pub path: Vec<Station>,

    /// Accumulated edge cost including surcharges.
    /// `f64::INFINITY` when no route exists.
    pub total_cost: f64,

    /// Line changes along the path, in order.
    pub transfers: Vec<LineChange>,

    /// Estimated travel time in whole minutes. `None` when unreachable.
    pub estimated_duration_mins: Option<i64>,
}

impl RouteResult {
    /// The result for a query with no route.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: f64::INFINITY,
            transfers: Vec::new(),
            estimated_duration_mins: None,
        }
    }

    /// Whether a route was found. Check this rather than path emptiness.
    pub fn is_reachable(&self) -> bool {
        self.total_cost.is_finite()
    }

    /// Number of stations on the path, endpoints included.
    pub fn number_of_stations(&self) -> usize {
        self.path.len()
    }

    pub fn estimated_duration(&self) -> Option<Duration> {
        self.estimated_duration_mins.map(Duration::minutes)
    }
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the cheapest first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier<'g> {
    cost: f64,
    node: &'g str,
}

impl Eq for Frontier<'_> {}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds least-cost routes under a [`RouteConfig`] cost model.
pub struct PathFinder<'a> {
    config: &'a RouteConfig,
}

impl<'a> PathFinder<'a> {
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { config }
    }

    /// Find the least-cost route from `start` to `end`.
    ///
    /// `stations` supplies the records reported in the path; each node
    /// resolves to the first record carrying its name. Unknown names and
    /// disconnected pairs both produce [`RouteResult::unreachable`].
    pub fn shortest_path(
        &self,
        graph: &Graph,
        stations: &[Station],
        start: &str,
        end: &str,
    ) -> RouteResult {
        let (Some(start), Some(end)) = (graph.node_key(start), graph.node_key(end)) else {
            debug!(start, end, "route endpoint not in graph");
            return RouteResult::unreachable();
        };

        let mut dist: HashMap<&str, f64> = HashMap::new();
        let mut previous: HashMap<&str, (&str, &Edge)> = HashMap::new();
        let mut settled: HashSet<&str> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        dist.insert(start, 0.0);
        frontier.push(Frontier {
            cost: 0.0,
            node: start,
        });

        while let Some(Frontier { cost, node }) = frontier.pop() {
            if !settled.insert(node) {
                continue;
            }
            if node == end {
                break;
            }

            trace!(station = node, cost, "settled");

            let arrived_by = previous.get(node).map(|&(_, edge)| edge);

            for (next, edge) in graph.neighbors(node) {
                if settled.contains(next) {
                    continue;
                }

                let candidate = cost + edge.cost() + self.surcharge(arrived_by, edge);
                let best = dist.get(next).copied().unwrap_or(f64::INFINITY);

                if candidate < best {
                    dist.insert(next, candidate);
                    previous.insert(next, (node, edge));
                    frontier.push(Frontier {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        let Some(&total_cost) = dist.get(end) else {
            debug!(start, end, settled = settled.len(), "no route");
            return RouteResult::unreachable();
        };

        let mut names = vec![end];
        let mut current = end;
        while let Some(&(prev, _)) = previous.get(current) {
            names.push(prev);
            current = prev;
        }
        names.reverse();

        let mut records: HashMap<&str, &Station> = HashMap::new();
        for station in stations {
            records.entry(station.name()).or_insert(station);
        }
        let path: Vec<Station> = names
            .iter()
            .filter_map(|name| records.get(name).map(|&s| s.clone()))
            .collect();

        let transfers = line_changes(&path);
        let estimated = self.estimate_minutes(total_cost, path.len(), transfers.len());

        debug!(
            start,
            end,
            cost = total_cost,
            stations = path.len(),
            transfers = transfers.len(),
            "route found"
        );

        RouteResult {
            path,
            total_cost,
            transfers,
            estimated_duration_mins: Some(estimated),
        }
    }

    /// Extra cost for taking `edge` after arriving via `arrived_by`.
    fn surcharge(&self, arrived_by: Option<&Edge>, edge: &Edge) -> f64 {
        match arrived_by {
            Some(prev) if edge.is_transfer() && prev.from_line() != edge.from_line() => {
                self.config.transfer_surcharge
            }
            _ => 0.0,
        }
    }

    /// Estimated minutes for a route.
    ///
    /// `cost` mixes kilometres with transfer penalty units and is divided
    /// by speed as-is, matching the estimates existing clients expect.
    fn estimate_minutes(&self, cost: f64, stations: usize, transfers: usize) -> i64 {
        let travel = cost / self.config.average_speed_kmh * 60.0;
        let stops = stations.saturating_sub(1) as f64 * self.config.station_stop_mins;
        let changes = transfers as f64 * self.config.transfer_mins;

        (travel + stops + changes).round() as i64
    }
}

/// Line changes between consecutive records of a path.
pub fn line_changes(path: &[Station]) -> Vec<LineChange> {
    let mut changes = Vec::new();
    let Some(first) = path.first() else {
        return changes;
    };

    let mut current_line = first.line();
    for station in &path[1..] {
        if station.line() != current_line {
            changes.push(LineChange {
                station: station.name().to_string(),
                from_line: current_line.to_string(),
                to_line: station.line().to_string(),
            });
            current_line = station.line();
        }
    }

    changes
}

/// Build a graph from `stations` and find the route from `start` to `end`.
///
/// The graph is built fresh for every call; nothing is shared between
/// queries.
pub fn plan_route(config: &RouteConfig, stations: &[Station], start: &str, end: &str) -> RouteResult {
    let graph = config.graph_builder().build(stations);
    PathFinder::new(config).shortest_path(&graph, stations, start, end)
}

/// Find a route with the default cost model.
pub fn shortest_path(graph: &Graph, stations: &[Station], start: &str, end: &str) -> RouteResult {
    PathFinder::new(&RouteConfig::default()).shortest_path(graph, stations, start, end)
}
