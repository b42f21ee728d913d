//! Bicpath node: RocksDB-backed graph store behind an HTTP path API.

pub mod api;
pub mod config;
pub mod node;
pub mod state;
pub mod storage;

pub use config::NodeConfig;
pub use node::BicpathNode;
