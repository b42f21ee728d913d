use async_trait::async_trait;
use bicpath_core::{ChargeTable, Link};

use crate::error::StoreError;
use crate::types::{Dataset, DatasetSummary, GraphSnapshot};

/// Graph data source interface.
///
/// Each implementation backs path queries with a concrete store (memory,
/// RocksDB, ...). Queries observe a consistent dataset only when no bulk
/// reload is in progress; implementations that can interleave the two must
/// override [`GraphStore::snapshot`] to read links and charges from one
/// generation.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// All transfer links, in a stable order for the duration of the call.
    async fn list_edges(&self) -> Result<Vec<Link>, StoreError>;

    /// Charge per bank. Banks without a known charge are absent.
    async fn list_charges(&self) -> Result<ChargeTable, StoreError>;

    /// Links and charges for one query.
    async fn snapshot(&self) -> Result<GraphSnapshot, StoreError> {
        let links = self.list_edges().await?;
        let charges = self.list_charges().await?;
        Ok(GraphSnapshot { links, charges })
    }

    /// Replace the whole dataset. Readers see either the old or the new
    /// dataset, never a mix.
    async fn replace_all(&self, dataset: Dataset) -> Result<DatasetSummary, StoreError>;

    /// Summary of the dataset currently served, `None` before the first load.
    async fn summary(&self) -> Result<Option<DatasetSummary>, StoreError>;

    /// Return the unique identifier of this store (e.g. "store-memory").
    fn store_id(&self) -> &str;
}
