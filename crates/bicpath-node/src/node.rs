//! The Bicpath node orchestrator.
//!
//! Opens the RocksDB store, optionally loads the configured CSV files and
//! runs the HTTP API server in a background task.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use bicpath_store::{DatasetSummary, GraphStore};

use crate::config::NodeConfig;
use crate::state::NodeState;
use crate::storage::RocksStore;

/// The Bicpath node.
pub struct BicpathNode {
    /// Node configuration.
    config: NodeConfig,
    /// Shared state accessible from HTTP handlers.
    node_state: Option<Arc<NodeState>>,
    /// Address the API server is bound to.
    local_addr: Option<SocketAddr>,
    /// The HTTP API server task.
    server: Option<JoinHandle<Result<()>>>,
}

impl BicpathNode {
    /// Create a new node with the given config.
    pub fn new(config: NodeConfig) -> Result<Self> {
        tracing::info!(api = %config.api_socket_addr(), "Bicpath node created");
        Ok(Self {
            config,
            node_state: None,
            local_addr: None,
            server: None,
        })
    }

    /// Initialize and start the node: storage, HTTP API.
    pub async fn start(&mut self) -> Result<()> {
        tracing::info!("starting Bicpath node");

        // Initialize storage
        let store: Arc<dyn GraphStore> = Arc::new(RocksStore::open(&self.config.storage.data_dir)?);
        tracing::info!(path = %self.config.storage.data_dir.display(), "storage initialized");

        if let Some(summary) = store.summary().await? {
            tracing::info!(
                dataset_id = %summary.dataset_id,
                banks = summary.banks,
                links = summary.links,
                loaded_at = %summary.loaded_at,
                "serving persisted dataset"
            );
        }

        let node_state = Arc::new(NodeState::new(store, self.config.ingest.clone()));

        // Bind here so a port conflict fails start() instead of the background task
        let listener = TcpListener::bind(self.config.api_socket_addr()).await?;
        self.local_addr = Some(listener.local_addr()?);

        let api_state = node_state.clone();
        self.server = Some(tokio::spawn(crate::api::serve(listener, api_state)));
        self.node_state = Some(node_state);

        Ok(())
    }

    /// Reload the configured CSV files into the store.
    pub async fn upload(&self) -> Result<DatasetSummary> {
        let state = self
            .node_state
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("node not started"))?;
        let summary = state.reload().await?;
        Ok(summary)
    }

    /// Wait for the API server to exit.
    pub async fn run(&mut self) -> Result<()> {
        let server = self
            .server
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("node not started"))?;

        let result = server.await;
        self.server = None;
        match result {
            Ok(served) => served,
            Err(e) => Err(anyhow::anyhow!("API server task failed: {e}")),
        }
    }

    /// Gracefully shut down the node.
    pub async fn shutdown(&mut self) -> Result<()> {
        tracing::info!("shutting down Bicpath node");

        if let Some(server) = self.server.take() {
            server.abort();
            let _ = server.await;
            tracing::info!("HTTP API server stopped");
        }

        // Dropping the last state handle closes the RocksDB store
        self.node_state = None;
        self.local_addr = None;

        tracing::info!("Bicpath node shut down");
        Ok(())
    }

    /// Address the API is listening on, once started.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }
}
