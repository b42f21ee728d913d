use bicpath_store::StoreError;

/// Errors that can occur within the routing layer.
///
/// An unreachable destination is not an error; see [`crate::PathResult::unreachable`].
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("invalid edge weight {weight} on {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("graph data unavailable: {0}")]
    Store(#[from] StoreError),
}
