//! Bicpath Routing — fastest and cheapest transfer routes between banks.
//!
//! This crate provides:
//! - [`PriorityQueue`] — a comparator-ordered binary min-heap.
//! - [`Graph`] — adjacency built from a flat list of links.
//! - [`Weighting`] — edge cost providers: [`TimeWeighting`] and [`ChargeWeighting`].
//! - [`PathFinder`] — a Dijkstra search generic over the weighting.
//! - [`RouteService`] — the query surface, reading graph data from a
//!   [`bicpath_store::GraphStore`] on every call.

pub mod error;
pub mod graph;
pub mod path;
pub mod pathfinder;
pub mod queue;
pub mod service;
pub mod weighting;

// Re-exports for convenience.
pub use error::RoutingError;
pub use graph::{Edge, Graph};
pub use path::{CheapestPath, FastestPath, PathResult};
pub use pathfinder::PathFinder;
pub use queue::PriorityQueue;
pub use service::RouteService;
pub use weighting::{ChargeWeighting, TimeWeighting, Weighting};
