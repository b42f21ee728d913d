pub mod init;
pub mod query;
pub mod route;
pub mod status;
pub mod upload;

use bicpath_core::Bic;

/// Where `bicpath-node` listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// `A -> B -> C`, or `(no route)` for an empty path.
pub fn format_path(path: &[Bic]) -> String {
    if path.is_empty() {
        return "(no route)".into();
    }
    path.iter()
        .map(Bic::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn format_weight(weight: f64) -> String {
    if weight.is_finite() {
        format!("{weight}")
    } else {
        "unreachable".into()
    }
}
