use bicpath_core::{Bank, ChargeTable, Link};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one loaded dataset generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(pub Uuid);

impl DatasetId {
    /// Create a new dataset ID (UUID v7 — time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete bank and link dataset, as produced by bulk ingest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub banks: Vec<Bank>,
    pub links: Vec<Link>,
}

impl Dataset {
    pub fn new(banks: Vec<Bank>, links: Vec<Link>) -> Self {
        Self { banks, links }
    }

    /// The read-side view of this dataset.
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            links: self.links.clone(),
            charges: ChargeTable::from_banks(&self.banks),
        }
    }
}

/// Links and charges read together from one dataset generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSnapshot {
    pub links: Vec<Link>,
    pub charges: ChargeTable,
}

/// Bookkeeping about the dataset currently served by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset_id: DatasetId,
    pub banks: usize,
    pub links: usize,
    pub loaded_at: DateTime<Utc>,
}

impl DatasetSummary {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            dataset_id: DatasetId::new(),
            banks: dataset.banks.len(),
            links: dataset.links.len(),
            loaded_at: Utc::now(),
        }
    }
}
