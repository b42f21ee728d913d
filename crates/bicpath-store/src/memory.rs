use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use bicpath_core::{ChargeTable, Link};

use crate::error::StoreError;
use crate::traits::GraphStore;
use crate::types::{Dataset, DatasetSummary, GraphSnapshot};

/// One published dataset generation.
#[derive(Debug, Default)]
struct Generation {
    snapshot: GraphSnapshot,
    summary: Option<DatasetSummary>,
}

/// In-memory graph store.
///
/// The current dataset is held as an immutable generation behind an
/// `Arc`; a reload builds the next generation off to the side and swaps
/// the pointer, so a reader holding the previous generation is never
/// affected. Useful for tests, fixtures and offline queries.
pub struct MemoryStore {
    current: RwLock<Arc<Generation>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation::default())),
        }
    }

    /// Create a store already serving `dataset`.
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(Self::build_generation(&dataset))),
        }
    }

    /// Create a store from links and a charge table directly.
    pub fn with_snapshot(snapshot: GraphSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation {
                snapshot,
                summary: None,
            })),
        }
    }

    fn build_generation(dataset: &Dataset) -> Generation {
        Generation {
            snapshot: dataset.to_snapshot(),
            summary: Some(DatasetSummary::for_dataset(dataset)),
        }
    }

    fn current(&self) -> Result<Arc<Generation>, StoreError> {
        self.current
            .read()
            .map(|guard| Arc::clone(&*guard))
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn list_edges(&self) -> Result<Vec<Link>, StoreError> {
        Ok(self.current()?.snapshot.links.clone())
    }

    async fn list_charges(&self) -> Result<ChargeTable, StoreError> {
        Ok(self.current()?.snapshot.charges.clone())
    }

    async fn snapshot(&self) -> Result<GraphSnapshot, StoreError> {
        Ok(self.current()?.snapshot.clone())
    }

    async fn replace_all(&self, dataset: Dataset) -> Result<DatasetSummary, StoreError> {
        let summary = DatasetSummary::for_dataset(&dataset);
        let generation = Arc::new(Generation {
            snapshot: dataset.to_snapshot(),
            summary: Some(summary.clone()),
        });

        {
            let mut current = self
                .current
                .write()
                .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))?;
            *current = generation;
        }

        tracing::info!(
            dataset_id = %summary.dataset_id,
            banks = summary.banks,
            links = summary.links,
            "memory store dataset replaced"
        );
        Ok(summary)
    }

    async fn summary(&self) -> Result<Option<DatasetSummary>, StoreError> {
        Ok(self.current()?.summary.clone())
    }

    fn store_id(&self) -> &str {
        "store-memory"
    }
}
