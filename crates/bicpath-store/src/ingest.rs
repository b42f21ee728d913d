//! CSV loading for bulk ingest.
//!
//! Two sources, each with a header row:
//!
//! ```text
//! banks.csv:  BIC,Charge
//! links.csv:  FromBIC,ToBIC,TimeTakenInMinutes
//! ```
//!
//! An empty `Charge` cell is a charge of zero. A BIC may appear only once
//! in the bank table. Any malformed row fails the whole load; nothing is
//! handed to a store until both files have been read completely.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use bicpath_core::{Bank, Bic, CoreError, Link};
use serde::Deserialize;

use crate::error::IngestError;
use crate::types::Dataset;

#[derive(Debug, Deserialize)]
struct BankRow {
    #[serde(rename = "BIC")]
    bic: String,
    #[serde(rename = "Charge", default)]
    charge: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LinkRow {
    #[serde(rename = "FromBIC")]
    from: String,
    #[serde(rename = "ToBIC")]
    to: String,
    #[serde(rename = "TimeTakenInMinutes")]
    time: f64,
}

/// Read both CSV files into a [`Dataset`].
pub fn load_dataset(banks_path: &Path, links_path: &Path) -> Result<Dataset, IngestError> {
    let banks = read_banks(open(banks_path)?, &banks_path.display().to_string())?;
    let links = read_links(open(links_path)?, &links_path.display().to_string())?;

    tracing::info!(
        banks = banks.len(),
        links = links.len(),
        banks_path = %banks_path.display(),
        links_path = %links_path.display(),
        "dataset loaded from CSV"
    );
    Ok(Dataset::new(banks, links))
}

/// Parse bank records. `source_name` is only used in error messages.
///
/// Fails on the second row carrying a BIC already seen.
pub fn read_banks<R: Read>(input: R, source_name: &str) -> Result<Vec<Bank>, IngestError> {
    let rows = read_rows(input, source_name, |row: BankRow| {
        Bank::new(Bic::new(row.bic)?, Some(row.charge.unwrap_or(0.0)))
    })?;

    let mut first_seen: HashMap<Bic, u64> = HashMap::with_capacity(rows.len());
    let mut banks = Vec::with_capacity(rows.len());
    for (line, bank) in rows {
        match first_seen.entry(bank.bic.clone()) {
            Entry::Occupied(first) => {
                return Err(IngestError::DuplicateBic {
                    source_name: source_name.to_string(),
                    bic: bank.bic.to_string(),
                    line,
                    first_line: *first.get(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(line);
            }
        }
        banks.push(bank);
    }
    Ok(banks)
}

/// Parse link records. `source_name` is only used in error messages.
pub fn read_links<R: Read>(input: R, source_name: &str) -> Result<Vec<Link>, IngestError> {
    let rows = read_rows(input, source_name, |row: LinkRow| {
        Link::new(Bic::new(row.from)?, Bic::new(row.to)?, row.time)
    })?;
    Ok(rows.into_iter().map(|(_, link)| link).collect())
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize and convert every record, keeping its line number.
fn read_rows<R, Row, T, F>(
    input: R,
    source_name: &str,
    convert: F,
) -> Result<Vec<(u64, T)>, IngestError>
where
    R: Read,
    Row: for<'de> Deserialize<'de>,
    F: Fn(Row) -> Result<T, CoreError>,
{
    let csv_error = |source: csv::Error| IngestError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut out = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: Row = record.deserialize(Some(&headers)).map_err(csv_error)?;
        let item = convert(row).map_err(|source| IngestError::InvalidRecord {
            source_name: source_name.to_string(),
            line,
            source,
        })?;
        out.push((line, item));
    }
    Ok(out)
}
