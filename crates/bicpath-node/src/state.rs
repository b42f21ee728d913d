//! Shared node state for the HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use bicpath_routing::RouteService;
use bicpath_store::{load_dataset, DatasetSummary, GraphStore, StoreError};

use crate::config::IngestConfig;

/// Shared state for the running node, accessible from HTTP handlers.
pub struct NodeState {
    /// When the node started.
    pub start_time: Instant,
    /// Path queries against the node's store.
    pub routes: RouteService<dyn GraphStore>,
    /// CSV sources for reloads.
    pub ingest: IngestConfig,
}

impl NodeState {
    pub fn new(store: Arc<dyn GraphStore>, ingest: IngestConfig) -> Self {
        Self {
            start_time: Instant::now(),
            routes: RouteService::new(store),
            ingest,
        }
    }

    pub fn store(&self) -> &Arc<dyn GraphStore> {
        self.routes.store()
    }

    /// Parse the configured CSV files and replace the whole dataset.
    ///
    /// Both files are fully parsed before the store is touched; a bad row
    /// leaves the current dataset in place.
    pub async fn reload(&self) -> Result<DatasetSummary, StoreError> {
        let banks_csv = self.ingest.banks_csv.clone();
        let links_csv = self.ingest.links_csv.clone();

        let dataset = tokio::task::spawn_blocking(move || load_dataset(&banks_csv, &links_csv))
            .await
            .map_err(|e| StoreError::Unavailable(format!("ingest task failed: {e}")))??;

        self.store().replace_all(dataset).await
    }
}
