use std::collections::HashMap;

use bicpath_core::{Bic, Link};

/// An outgoing edge in the adjacency map.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// The bank this edge leads to.
    pub to: Bic,
    /// Transfer time in minutes.
    pub time: f64,
}

/// Directed transfer graph: BIC -> outgoing edges.
///
/// Built fresh for every query and owned by that query alone. Parallel
/// edges are kept; the search naturally prefers the cheaper one. Each
/// adjacency list is sorted by `(to, time)` so that relaxation order, and
/// therefore tie-breaking, does not depend on the order links were loaded.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Bic, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Build adjacency from a flat list of links. Never fails; no links
    /// yields an empty graph.
    pub fn from_links<'a>(links: impl IntoIterator<Item = &'a Link>) -> Self {
        let mut adjacency: HashMap<Bic, Vec<Edge>> = HashMap::new();
        let mut edge_count = 0;

        for link in links {
            adjacency.entry(link.from.clone()).or_default().push(Edge {
                to: link.to.clone(),
                time: link.time,
            });
            edge_count += 1;
        }

        for edges in adjacency.values_mut() {
            edges.sort_by(|a, b| a.to.cmp(&b.to).then(a.time.total_cmp(&b.time)));
        }

        Self {
            adjacency,
            edge_count,
        }
    }

    /// Outgoing edges of `node`; empty for unknown nodes.
    pub fn outgoing(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
