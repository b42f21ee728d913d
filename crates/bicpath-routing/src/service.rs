//! Query surface for request handlers.

use std::sync::Arc;

use bicpath_core::Bic;
use bicpath_store::GraphStore;

use crate::error::RoutingError;
use crate::graph::Graph;
use crate::path::{CheapestPath, FastestPath};
use crate::pathfinder::PathFinder;
use crate::weighting::{ChargeWeighting, TimeWeighting};

/// Answers fastest/cheapest path queries against an injected [`GraphStore`].
///
/// Every call reads the store afresh, builds a private graph and discards
/// it afterwards; nothing mutable is shared between concurrent calls.
/// Store failures are returned unchanged as [`RoutingError::Store`] and
/// are never retried here.
pub struct RouteService<S: GraphStore + ?Sized> {
    store: Arc<S>,
    finder: PathFinder,
}

impl<S: GraphStore + ?Sized> Clone for RouteService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            finder: self.finder,
        }
    }
}

impl<S: GraphStore + ?Sized> RouteService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            finder: PathFinder::new(),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Minimum total transfer time from `start` to `end`.
    pub async fn find_fastest_path(
        &self,
        start: &Bic,
        end: &Bic,
    ) -> Result<FastestPath, RoutingError> {
        let links = self.store.list_edges().await?;
        let graph = Graph::from_links(&links);
        tracing::debug!(
            store = self.store.store_id(),
            edges = graph.edge_count(),
            "fastest-path graph built"
        );

        let result = self.finder.search(start, end, &graph, &TimeWeighting)?;
        Ok(result.into())
    }

    /// Minimum total receiving-bank charge from `start` to `end`.
    pub async fn find_cheapest_path(
        &self,
        start: &Bic,
        end: &Bic,
    ) -> Result<CheapestPath, RoutingError> {
        let snapshot = self.store.snapshot().await?;
        let graph = Graph::from_links(&snapshot.links);
        tracing::debug!(
            store = self.store.store_id(),
            edges = graph.edge_count(),
            charges = snapshot.charges.len(),
            "cheapest-path graph built"
        );

        let weighting = ChargeWeighting::new(&snapshot.charges);
        let result = self.finder.search(start, end, &graph, &weighting)?;
        Ok(result.into())
    }
}
