use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use crate::error::CoreError;

/// Bank Identifier Code, the node key of the transfer graph.
///
/// Any non-empty string is accepted; no ISO 9362 structure is enforced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bic(String);

impl Bic {
    /// Create a BIC, trimming surrounding whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyBic);
        }
        if trimmed.len() == code.len() {
            Ok(Self(code))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Bic {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Bic> for String {
    fn from(bic: Bic) -> Self {
        bic.0
    }
}

impl Borrow<str> for Bic {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Bic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed transfer link between two banks.
///
/// Deserialization goes through [`Link::new`], so a stored link with a bad
/// time is rejected on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinkRecord")]
pub struct Link {
    /// Sending bank.
    pub from: Bic,
    /// Receiving bank.
    pub to: Bic,
    /// Transfer time in minutes.
    pub time: f64,
}

impl Link {
    /// Create a link, rejecting negative or non-finite transfer times.
    pub fn new(from: Bic, to: Bic, time: f64) -> Result<Self, CoreError> {
        if !time.is_finite() || time < 0.0 {
            return Err(CoreError::InvalidTime {
                from: from.to_string(),
                to: to.to_string(),
                time,
            });
        }
        Ok(Self { from, to, time })
    }
}

#[derive(Deserialize)]
struct LinkRecord {
    from: Bic,
    to: Bic,
    time: f64,
}

impl TryFrom<LinkRecord> for Link {
    type Error = CoreError;

    fn try_from(record: LinkRecord) -> Result<Self, Self::Error> {
        Self::new(record.from, record.to, record.time)
    }
}

/// A bank and the charge it levies on incoming transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BankRecord")]
pub struct Bank {
    pub bic: Bic,
    /// `None` when no charge is known; such a bank is never a cheapest-path hop.
    pub charge: Option<f64>,
}

impl Bank {
    pub fn new(bic: Bic, charge: Option<f64>) -> Result<Self, CoreError> {
        if let Some(charge) = charge {
            if !charge.is_finite() || charge < 0.0 {
                return Err(CoreError::InvalidCharge {
                    bic: bic.to_string(),
                    charge,
                });
            }
        }
        Ok(Self { bic, charge })
    }
}

#[derive(Deserialize)]
struct BankRecord {
    bic: Bic,
    #[serde(default)]
    charge: Option<f64>,
}

impl TryFrom<BankRecord> for Bank {
    type Error = CoreError;

    fn try_from(record: BankRecord) -> Result<Self, Self::Error> {
        Self::new(record.bic, record.charge)
    }
}

/// Destination-side charge per bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChargeTable(HashMap<Bic, f64>);

impl ChargeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from bank records. Banks without a charge are left out;
    /// a later record for the same BIC replaces an earlier one.
    pub fn from_banks<'a>(banks: impl IntoIterator<Item = &'a Bank>) -> Self {
        let mut table = Self::new();
        for bank in banks {
            match bank.charge {
                Some(charge) => {
                    table.0.insert(bank.bic.clone(), charge);
                }
                None => {
                    table.0.remove(bank.bic.as_str());
                }
            }
        }
        table
    }

    pub fn insert(&mut self, bic: Bic, charge: f64) -> Option<f64> {
        self.0.insert(bic, charge)
    }

    /// The charge for `bic`, if one is recorded.
    pub fn get(&self, bic: &str) -> Option<f64> {
        self.0.get(bic).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Bic, f64)> {
        self.0.iter().map(|(bic, charge)| (bic, *charge))
    }
}

impl FromIterator<(Bic, f64)> for ChargeTable {
    fn from_iter<I: IntoIterator<Item = (Bic, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
