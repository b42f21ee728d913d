//! Fixtures shared by the cross-crate tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bicpath_core::{Bank, Bic, Link};
use bicpath_routing::RouteService;
use bicpath_store::{Dataset, MemoryStore};

pub fn bic(code: &str) -> Bic {
    Bic::new(code).expect("fixture BIC")
}

pub fn link(from: &str, to: &str, time: f64) -> Link {
    Link::new(bic(from), bic(to), time).expect("fixture link")
}

pub fn bank(code: &str, charge: Option<f64>) -> Bank {
    Bank::new(bic(code), charge).expect("fixture bank")
}

pub fn codes(path: &[Bic]) -> Vec<&str> {
    path.iter().map(Bic::as_str).collect()
}

/// `A→B(5) B→C(3) A→C(10)`.
pub fn triangle_links() -> Vec<Link> {
    vec![link("A", "B", 5.0), link("B", "C", 3.0), link("A", "C", 10.0)]
}

pub fn memory_service(banks: Vec<Bank>, links: Vec<Link>) -> RouteService<MemoryStore> {
    RouteService::new(Arc::new(MemoryStore::with_dataset(Dataset::new(banks, links))))
}

/// A scratch directory holding `banks.csv` and `links.csv`. Removed on drop.
pub struct CsvFixture {
    dir: PathBuf,
}

impl CsvFixture {
    pub fn new(banks: &str, links: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("bicpath-it-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        std::fs::write(dir.join("banks.csv"), banks).expect("write banks.csv");
        std::fs::write(dir.join("links.csv"), links).expect("write links.csv");
        Self { dir }
    }

    pub fn banks(&self) -> PathBuf {
        self.dir.join("banks.csv")
    }

    pub fn links(&self) -> PathBuf {
        self.dir.join("links.csv")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Drop for CsvFixture {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}
