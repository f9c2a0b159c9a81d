//! Graph construction from a flat station list.

use tracing::debug;

use crate::domain::Station;
use crate::interchange::{InterchangePolicy, WithinRadius};

use super::adjacency::Graph;
use super::edge::Edge;

/// Default cost of changing lines, in the same units as distance.
pub const DEFAULT_TRANSFER_PENALTY: f64 = 5.0;

/// Builds a [`Graph`] from station records.
///
/// Every unordered pair of records with different names is considered once:
///
/// - same line: a direct edge each way, weighted by haversine distance;
/// - different lines that the policy deems an interchange: a transfer edge
///   each way, weighted by the transfer penalty.
///
/// This is quadratic in the number of records, which is fine for networks
/// of a few thousand stations rebuilt per query.
#[derive(Debug, Clone)]
pub struct GraphBuilder<P = WithinRadius> {
    policy: P,
    transfer_penalty: f64,
}

impl Default for GraphBuilder<WithinRadius> {
    fn default() -> Self {
        Self::new(WithinRadius::default(), DEFAULT_TRANSFER_PENALTY)
    }
}

impl<P: InterchangePolicy> GraphBuilder<P> {
    /// Create a builder with the given interchange policy and penalty.
    ///
    /// Negative or non-finite penalties are treated as zero so edge
    /// weights stay non-negative.
    pub fn new(policy: P, transfer_penalty: f64) -> Self {
        let transfer_penalty = if transfer_penalty.is_finite() {
            transfer_penalty.max(0.0)
        } else {
            0.0
        };
        Self {
            policy,
            transfer_penalty,
        }
    }

    pub fn transfer_penalty(&self) -> f64 {
        self.transfer_penalty
    }

    /// Build the graph. Never fails; an empty list yields an empty graph.
    pub fn build(&self, stations: &[Station]) -> Graph {
        let mut graph = Graph::new();

        for station in stations {
            graph.add_node(station.name());
        }

        for (i, a) in stations.iter().enumerate() {
            for b in &stations[i + 1..] {
                if a.name() == b.name() {
                    continue;
                }

                if a.shares_line(b) {
                    let cost = a.position().distance_km(&b.position());
                    graph.insert_edge(a.name(), b.name(), Edge::direct(cost, a.line()));
                    graph.insert_edge(b.name(), a.name(), Edge::direct(cost, b.line()));
                } else if self.policy.is_interchange(a.position(), b.position()) {
                    let penalty = self.transfer_penalty;
                    graph.insert_edge(a.name(), b.name(), Edge::transfer(penalty, a.line(), b.line()));
                    graph.insert_edge(b.name(), a.name(), Edge::transfer(penalty, b.line(), a.line()));

                    graph.record_interchange(a.name(), b.line());
                    graph.record_interchange(b.name(), a.line());
                }
            }
        }

        debug!(
            stations = stations.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built route graph"
        );

        graph
    }
}

/// Build a graph with the default interchange radius and transfer penalty.
pub fn build(stations: &[Station]) -> Graph {
    GraphBuilder::default().build(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;
    use crate::graph::EdgeKind;

    fn station(name: &str, line: &str, lon: f64, lat: f64) -> Station {
        Station::new(name, Position::new(lon, lat).unwrap(), line).unwrap()
    }

    #[test]
    fn empty_input() {
        let g = build(&[]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn single_station() {
        let g = build(&[station("A", "M1", 29.0, 41.0)]);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn same_line_gets_direct_edges_both_ways() {
        let a = station("A", "M1", 29.0, 41.0);
        let b = station("B", "M1", 29.0, 41.01);
        let g = build(&[a.clone(), b.clone()]);

        let ab = g.edge("A", "B").unwrap();
        let ba = g.edge("B", "A").unwrap();
        assert_eq!(ab.kind(), EdgeKind::Direct);
        assert_eq!(ab.cost(), ba.cost());
        assert_eq!(ab.cost(), a.position().distance_km(&b.position()));
        assert_eq!(ab.from_line(), "M1");
    }

    #[test]
    fn same_line_connects_every_pair() {
        // Every same-line pair is adjacent, not just consecutive stops
        let g = build(&[
            station("A", "M1", 29.0, 41.0),
            station("B", "M1", 29.0, 41.01),
            station("C", "M1", 29.0, 41.02),
        ]);
        assert!(g.edge("A", "C").is_some());
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn nearby_lines_get_transfer_edges() {
        let g = build(&[
            station("B", "M1", 29.0, 41.0),
            station("C", "M2", 29.0, 41.001),
        ]);

        let bc = g.edge("B", "C").unwrap();
        assert!(bc.is_transfer());
        assert_eq!(bc.cost(), DEFAULT_TRANSFER_PENALTY);
        assert_eq!((bc.from_line(), bc.to_line()), ("M1", "M2"));

        let cb = g.edge("C", "B").unwrap();
        assert_eq!((cb.from_line(), cb.to_line()), ("M2", "M1"));
    }

    #[test]
    fn distant_lines_stay_disconnected() {
        let g = build(&[
            station("A", "M1", 29.0, 41.0),
            station("B", "M2", 29.0, 41.01),
        ]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn same_name_records_share_a_node_without_self_edge() {
        let g = build(&[
            station("Yenikapı", "M1", 29.0, 41.0),
            station("Yenikapı", "M2", 29.0, 41.0),
        ]);
        assert_eq!(g.node_count(), 1);
        assert!(g.edge("Yenikapı", "Yenikapı").is_none());
        assert!(g.interchange_lines("Yenikapı").is_none());
    }

    #[test]
    fn interchange_index_lists_other_lines() {
        let g = build(&[
            station("B", "M1", 29.0, 41.0),
            station("C", "M2", 29.0, 41.001),
            station("E", "M3", 29.001, 41.0),
        ]);

        let at_b: Vec<_> = g.interchange_lines("B").unwrap().iter().cloned().collect();
        assert_eq!(at_b, vec!["M2".to_string(), "M3".to_string()]);
        assert!(g.interchange_lines("C").unwrap().contains("M1"));
    }

    #[test]
    fn custom_policy_and_penalty() {
        let builder = GraphBuilder::new(WithinRadius::new(5.0), 2.5);
        let g = builder.build(&[
            station("A", "M1", 29.0, 41.0),
            station("B", "M2", 29.0, 41.01),
        ]);
        assert_eq!(g.edge("A", "B").map(Edge::cost), Some(2.5));
    }

    #[test]
    fn negative_penalty_clamped() {
        let builder = GraphBuilder::new(WithinRadius::default(), -3.0);
        assert_eq!(builder.transfer_penalty(), 0.0);
    }

    #[test]
    fn input_is_not_modified() {
        let stations = vec![
            station("A", "M1", 29.0, 41.0),
            station("B", "M1", 29.0, 41.01),
        ];
        let before = stations.clone();
        let _ = build(&stations);
        assert_eq!(stations, before);
    }
}
