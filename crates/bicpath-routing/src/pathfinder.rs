use std::cmp::Ordering;
use std::collections::HashMap;

use bicpath_core::Bic;

use crate::error::RoutingError;
use crate::graph::Graph;
use crate::path::PathResult;
use crate::queue::PriorityQueue;
use crate::weighting::Weighting;

/// Internal frontier entry: a node and the weight it was reached with.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<'a> {
    node: &'a Bic,
    weight: f64,
}

/// Lowest weight first; equal weights pop in ascending BIC order.
fn frontier_order(a: &FrontierEntry<'_>, b: &FrontierEntry<'_>) -> Ordering {
    a.weight
        .total_cmp(&b.weight)
        .then_with(|| a.node.cmp(b.node))
}

/// Single-source, single-target best-path search (Dijkstra) over a
/// [`Graph`], generic over the edge [`Weighting`].
///
/// Weights must be non-negative. The frontier uses lazy deletion: an
/// improved node is pushed again and the outdated entry is skipped when it
/// surfaces. Paths are not carried in frontier entries; a predecessor map
/// is kept instead and the path is rebuilt once, on success.
///
/// Tie-break: among equal-weight routes the one relaxed first wins
/// (strict `<`). Adjacency lists are sorted and the frontier is ordered by
/// `(weight, BIC)`, so the result depends only on the set of links, not on
/// the order they were loaded in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find the minimum-weight path from `start` to `end`.
    ///
    /// Returns [`PathResult::unreachable`] when `end` cannot be reached,
    /// including when `start` has no outgoing edges. `start == end` yields
    /// `[start]` at weight 0. A negative or NaN edge weight fails the search
    /// with [`RoutingError::InvalidWeight`].
    pub fn search<'a, W>(
        &self,
        start: &'a Bic,
        end: &Bic,
        graph: &'a Graph,
        weighting: &W,
    ) -> Result<PathResult, RoutingError>
    where
        W: Weighting + ?Sized,
    {
        let mut best: HashMap<&'a Bic, f64> = HashMap::new();
        let mut predecessor: HashMap<&'a Bic, &'a Bic> = HashMap::new();
        let mut frontier = PriorityQueue::new(frontier_order);

        best.insert(start, 0.0);
        frontier.push(FrontierEntry {
            node: start,
            weight: 0.0,
        });

        let mut settled = 0usize;

        while !frontier.is_empty() {
            let current = frontier.pop()?;

            if current.node == end {
                let path = Self::build_path(&predecessor, current.node);
                tracing::debug!(
                    %start,
                    %end,
                    cost = current.weight,
                    hops = path.len() - 1,
                    settled,
                    "path found"
                );
                return Ok(PathResult {
                    path,
                    cost: current.weight,
                });
            }

            let known = best.get(current.node).copied().unwrap_or(f64::INFINITY);
            if current.weight > known {
                // Stale duplicate of an improved entry.
                continue;
            }
            settled += 1;

            for edge in graph.outgoing(current.node.as_str()) {
                let weight = weighting.weight(edge);
                if weight.is_nan() || weight < 0.0 {
                    return Err(RoutingError::InvalidWeight {
                        from: current.node.to_string(),
                        to: edge.to.to_string(),
                        weight,
                    });
                }

                let candidate = current.weight + weight;
                let known = best.get(&edge.to).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    best.insert(&edge.to, candidate);
                    predecessor.insert(&edge.to, current.node);
                    frontier.push(FrontierEntry {
                        node: &edge.to,
                        weight: candidate,
                    });
                }
            }
        }

        tracing::debug!(%start, %end, settled, "destination unreachable");
        Ok(PathResult::unreachable())
    }

    /// Walk predecessors back from `end` and return the path start-first.
    fn build_path(predecessor: &HashMap<&Bic, &Bic>, end: &Bic) -> Vec<Bic> {
        let mut path = vec![end.clone()];
        let mut node = end;
        while let Some(&parent) = predecessor.get(node) {
            path.push(parent.clone());
            node = parent;
        }
        path.reverse();
        path
    }
}
