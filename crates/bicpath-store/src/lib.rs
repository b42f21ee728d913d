//! Bicpath Store Layer
//!
//! The data collaborator behind path queries: a [`GraphStore`] trait for
//! reading links and charges and for replacing the whole dataset, an
//! in-memory snapshot implementation, and the CSV loader used by bulk
//! ingest.

pub mod error;
pub mod ingest;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::{IngestError, StoreError};
pub use ingest::{load_dataset, read_banks, read_links};
pub use memory::MemoryStore;
pub use traits::GraphStore;
pub use types::{Dataset, DatasetId, DatasetSummary, GraphSnapshot};
