use bicpath_core::Bic;
use serde::{Deserialize, Serialize};

/// Serde helper to serialize an unbounded weight as `null` and read `null`
/// back as `f64::INFINITY`.
mod infinite_as_null {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(weight: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if weight.is_finite() {
            serializer.serialize_f64(*weight)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Outcome of a single search: the node sequence and its accumulated weight.
///
/// An unreachable destination is a normal result with an empty path and an
/// infinite cost.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub path: Vec<Bic>,
    pub cost: f64,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of transfers along the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Fastest route, total transfer time in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestPath {
    pub path: Vec<Bic>,
    #[serde(with = "infinite_as_null")]
    pub time: f64,
}

impl From<PathResult> for FastestPath {
    fn from(result: PathResult) -> Self {
        Self {
            path: result.path,
            time: result.cost,
        }
    }
}

/// Cheapest route, total of receiving-bank charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheapestPath {
    pub path: Vec<Bic>,
    #[serde(with = "infinite_as_null")]
    pub cost: f64,
}

impl From<PathResult> for CheapestPath {
    fn from(result: PathResult) -> Self {
        Self {
            path: result.path,
            cost: result.cost,
        }
    }
}
