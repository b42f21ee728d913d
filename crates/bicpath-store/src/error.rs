use std::path::PathBuf;

use bicpath_core::CoreError;

/// Store-layer errors.
///
/// Every variant means the requested data could not be produced; callers
/// get no partial dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("corrupt record under key {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("ingest failed: {0}")]
    Ingest(#[from] IngestError),
}

/// Errors raised while reading the tabular bank and link sources.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid record in {source_name} at line {line}: {source}")]
    InvalidRecord {
        source_name: String,
        line: u64,
        #[source]
        source: CoreError,
    },

    #[error("duplicate BIC {bic} in {source_name} at line {line} (first seen at line {first_line})")]
    DuplicateBic {
        source_name: String,
        bic: String,
        line: u64,
        first_line: u64,
    },
}
