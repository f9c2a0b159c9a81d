//! The route graph: stations keyed by name, with weighted neighbours.

use std::collections::{BTreeMap, BTreeSet};

use super::edge::Edge;

/// Adjacency structure derived from a station list.
///
/// Nodes are station names. Ordered maps keep iteration, and therefore
/// search tie-breaking, deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, Edge>>,
    /// Other lines reachable by a transfer, per station name.
    interchanges: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges. Existing nodes are left untouched.
    pub fn add_node(&mut self, name: &str) {
        if !self.adjacency.contains_key(name) {
            self.adjacency.insert(name.to_string(), BTreeMap::new());
        }
    }

    /// Insert `from -> to`, keeping whichever candidate is preferable if
    /// the pair already has an edge. Both endpoints become nodes.
    ///
    /// Cheaper wins; on a tie a direct edge beats a transfer.
    pub fn insert_edge(&mut self, from: &str, to: &str, edge: Edge) {
        self.add_node(to);
        let neighbors = self.adjacency.entry(from.to_string()).or_default();
        match neighbors.get(to) {
            Some(existing) if !edge.supersedes(existing) => {}
            _ => {
                neighbors.insert(to.to_string(), edge);
            }
        }
    }

    pub(super) fn record_interchange(&mut self, station: &str, other_line: &str) {
        self.interchanges
            .entry(station.to_string())
            .or_default()
            .insert(other_line.to_string());
    }

    /// Whether `name` is a node.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// The graph's own copy of the node key equal to `name`.
    pub fn node_key(&self, name: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(name)
            .map(|(key, _)| key.as_str())
    }

    /// All node names, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Outgoing edges from `name`. Empty if the node does not exist.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, &Edge)> {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, edge)| (to.as_str(), edge)))
    }

    /// The edge `from -> to`, if any.
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.adjacency.get(from)?.get(to)
    }

    /// Lines other than its own that `name` can change to.
    ///
    /// Diagnostic only; the path finder does not consult it.
    pub fn interchange_lines(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.interchanges.get(name)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains("A"));
        assert_eq!(g.neighbors("A").count(), 0);
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = Graph::new();
        g.add_node("A");
        g.insert_edge("A", "B", Edge::direct(1.0, "M1"));
        g.add_node("A");
        assert_eq!(g.neighbors("A").count(), 1);
    }

    #[test]
    fn insert_keeps_preferred_edge() {
        let mut g = Graph::new();
        g.insert_edge("A", "B", Edge::direct(3.0, "M1"));
        g.insert_edge("A", "B", Edge::direct(4.0, "M2"));
        assert_eq!(g.edge("A", "B").map(Edge::cost), Some(3.0));

        g.insert_edge("A", "B", Edge::transfer(2.0, "M1", "M3"));
        assert!(g.edge("A", "B").is_some_and(Edge::is_transfer));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn insert_edge_adds_both_nodes() {
        let mut g = Graph::new();
        g.insert_edge("A", "B", Edge::direct(1.0, "M1"));
        assert!(g.contains("A"));
        assert!(g.contains("B"));
        assert_eq!(g.node_key("B"), Some("B"));
        assert_eq!(g.node_key("Z"), None);
        assert_eq!(g.neighbors("B").count(), 0);
    }

    #[test]
    fn hand_built_edges_stay_non_negative() {
        let mut g = Graph::new();
        g.insert_edge("A", "B", Edge::direct(-2.0, "M1"));
        g.insert_edge("B", "C", Edge::transfer(f64::NAN, "M1", "M2"));
        assert_eq!(g.edge("A", "B").unwrap().cost(), 0.0);
        assert_eq!(g.edge("B", "C").unwrap().cost(), 0.0);
    }

    #[test]
    fn nodes_are_ordered() {
        let mut g = Graph::new();
        g.add_node("C");
        g.add_node("A");
        g.add_node("B");
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn interchange_index() {
        let mut g = Graph::new();
        g.record_interchange("A", "M2");
        g.record_interchange("A", "M3");
        g.record_interchange("A", "M2");

        let lines = g.interchange_lines("A").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains("M2"));
        assert!(g.interchange_lines("B").is_none());
    }
}
