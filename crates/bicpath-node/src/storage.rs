//! RocksDB storage backend for the Bicpath node.

use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, IteratorMode, Options, Snapshot, WriteBatch, DB};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;

use bicpath_core::{Bank, ChargeTable, Link};
use bicpath_store::{Dataset, DatasetSummary, GraphSnapshot, GraphStore, StoreError};

/// Column family names for different data types.
const CF_BANKS: &str = "banks";
const CF_LINKS: &str = "links";
const CF_STATE: &str = "state";

/// Key of the current [`DatasetSummary`] in the state column family.
const SUMMARY_KEY: &[u8] = b"summary";

/// RocksDB-backed [`GraphStore`].
///
/// Banks are keyed by BIC, links by their zero-padded position in the
/// uploaded table. A reload is one `WriteBatch`; reads go through a DB
/// snapshot, so a query never sees half of a reload.
pub struct RocksStore {
    db: DB,
    /// Serializes reloads so two batches never interleave their deletes.
    writer: Mutex<()>,
}

fn backend(err: rocksdb::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(value).map_err(|e| StoreError::CorruptRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(key: &[u8], value: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(value).map_err(|e| StoreError::CorruptRecord {
        key: String::from_utf8_lossy(key).into_owned(),
        reason: e.to_string(),
    })
}

fn link_key(index: usize) -> String {
    format!("{index:012}")
}

impl RocksStore {
    /// Open or create a RocksDB database at the given path with column families.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(path).map_err(|e| {
            StoreError::Unavailable(format!("cannot create {}: {e}", path.display()))
        })?;

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors = vec![
            ColumnFamilyDescriptor::new(CF_BANKS, Options::default()),
            ColumnFamilyDescriptor::new(CF_LINKS, Options::default()),
            ColumnFamilyDescriptor::new(CF_STATE, Options::default()),
        ];

        let db = DB::open_cf_descriptors(&opts, path, cf_descriptors).map_err(backend)?;
        tracing::info!(path = %path.display(), "rocksdb store opened");

        Ok(Self {
            db,
            writer: Mutex::new(()),
        })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily, StoreError> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Backend(format!("column family '{name}' not found")))
    }

    fn scan<T: DeserializeOwned>(&self, snap: &Snapshot<'_>, cf_name: &str) -> Result<Vec<T>, StoreError> {
        let cf = self.cf(cf_name)?;
        snap.iterator_cf(cf, IteratorMode::Start)
            .map(|item| {
                let (key, value) = item.map_err(backend)?;
                decode(&key, &value)
            })
            .collect()
    }

    fn read_snapshot(&self) -> Result<GraphSnapshot, StoreError> {
        let snap = self.db.snapshot();
        let links: Vec<Link> = self.scan(&snap, CF_LINKS)?;
        let banks: Vec<Bank> = self.scan(&snap, CF_BANKS)?;
        Ok(GraphSnapshot {
            links,
            charges: ChargeTable::from_banks(&banks),
        })
    }

    fn read_summary(&self) -> Result<Option<DatasetSummary>, StoreError> {
        let cf = self.cf(CF_STATE)?;
        match self.db.get_cf(cf, SUMMARY_KEY).map_err(backend)? {
            Some(bytes) => decode(SUMMARY_KEY, &bytes).map(Some),
            None => Ok(None),
        }
    }

    fn write_dataset(&self, dataset: &Dataset) -> Result<DatasetSummary, StoreError> {
        let _guard = self
            .writer
            .lock()
            .map_err(|_| StoreError::Unavailable("writer lock poisoned".into()))?;

        let banks_cf = self.cf(CF_BANKS)?;
        let links_cf = self.cf(CF_LINKS)?;
        let state_cf = self.cf(CF_STATE)?;

        let mut batch = WriteBatch::default();

        // Delete all...
        for cf in [banks_cf, links_cf] {
            for item in self.db.iterator_cf(cf, IteratorMode::Start) {
                let (key, _) = item.map_err(backend)?;
                batch.delete_cf(cf, key);
            }
        }

        // ...then insert all. Repeated BICs overwrite, so the last row wins.
        for bank in &dataset.banks {
            let key = bank.bic.as_str();
            batch.put_cf(banks_cf, key.as_bytes(), encode(key, bank)?);
        }
        for (index, link) in dataset.links.iter().enumerate() {
            let key = link_key(index);
            batch.put_cf(links_cf, key.as_bytes(), encode(&key, link)?);
        }

        let summary = DatasetSummary::for_dataset(dataset);
        batch.put_cf(state_cf, SUMMARY_KEY, encode("summary", &summary)?);

        self.db.write(batch).map_err(backend)?;
        Ok(summary)
    }
}

#[async_trait]
impl GraphStore for RocksStore {
    async fn list_edges(&self) -> Result<Vec<Link>, StoreError> {
        let snap = self.db.snapshot();
        self.scan(&snap, CF_LINKS)
    }

    async fn list_charges(&self) -> Result<ChargeTable, StoreError> {
        let snap = self.db.snapshot();
        let banks: Vec<Bank> = self.scan(&snap, CF_BANKS)?;
        Ok(ChargeTable::from_banks(&banks))
    }

    async fn snapshot(&self) -> Result<GraphSnapshot, StoreError> {
        self.read_snapshot()
    }

    async fn replace_all(&self, dataset: Dataset) -> Result<DatasetSummary, StoreError> {
        let summary = self.write_dataset(&dataset)?;
        tracing::info!(
            dataset_id = %summary.dataset_id,
            banks = summary.banks,
            links = summary.links,
            "rocksdb dataset replaced"
        );
        Ok(summary)
    }

    async fn summary(&self) -> Result<Option<DatasetSummary>, StoreError> {
        self.read_summary()
    }

    fn store_id(&self) -> &str {
        "store-rocksdb"
    }
}
