//! HTTP API server for the Bicpath node.
//!
//! Provides REST endpoints for dataset upload, fastest/cheapest path
//! queries and node status.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bicpath_core::Bic;
use bicpath_routing::{CheapestPath, FastestPath, RoutingError};

use crate::state::NodeState;

// --- Request/response types ---

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub banks: usize,
    pub links: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadFailure {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub version: String,
    pub store: String,
    pub uptime_secs: u64,
    pub banks: usize,
    pub links: usize,
    pub dataset_id: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn internal_error(err: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn required_bic(name: &str, raw: Option<&str>) -> Result<Bic, ApiError> {
    Bic::new(raw.unwrap_or_default()).map_err(|_| {
        tracing::warn!(param = name, "rejected path query");
        bad_request(format!("query parameter '{name}' is required"))
    })
}

fn endpoints(query: &PathQuery) -> Result<(Bic, Bic), ApiError> {
    let from = required_bic("from", query.from.as_deref())?;
    let to = required_bic("to", query.to.as_deref())?;
    Ok((from, to))
}

fn routing_failure(err: RoutingError) -> ApiError {
    tracing::error!(error = %err, "path query failed");
    internal_error(err)
}

// --- Handlers ---

async fn handle_upload(
    State(state): State<Arc<NodeState>>,
) -> Result<Json<UploadResponse>, (StatusCode, Json<UploadFailure>)> {
    match state.reload().await {
        Ok(summary) => Ok(Json(UploadResponse {
            success: true,
            message: "CSV data uploaded successfully".into(),
            banks: summary.banks,
            links: summary.links,
        })),
        Err(e) => {
            tracing::error!(error = %e, "upload failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadFailure {
                    success: false,
                    message: format!("Error uploading CSV data: {e}"),
                }),
            ))
        }
    }
}

async fn handle_fastest_path(
    State(state): State<Arc<NodeState>>,
    Query(query): Query<PathQuery>,
) -> Result<Json<FastestPath>, ApiError> {
    let (from, to) = endpoints(&query)?;
    let fastest = state
        .routes
        .find_fastest_path(&from, &to)
        .await
        .map_err(routing_failure)?;
    Ok(Json(fastest))
}

async fn handle_cheapest_path(
    State(state): State<Arc<NodeState>>,
    Query(query): Query<PathQuery>,
) -> Result<Json<CheapestPath>, ApiError> {
    let (from, to) = endpoints(&query)?;
    let cheapest = state
        .routes
        .find_cheapest_path(&from, &to)
        .await
        .map_err(routing_failure)?;
    Ok(Json(cheapest))
}

async fn handle_status(
    State(state): State<Arc<NodeState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let summary = state.store().summary().await.map_err(internal_error)?;
    Ok(Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store().store_id().to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        banks: summary.as_ref().map_or(0, |s| s.banks),
        links: summary.as_ref().map_or(0, |s| s.links),
        dataset_id: summary.as_ref().map(|s| s.dataset_id.to_string()),
        loaded_at: summary.map(|s| s.loaded_at),
    }))
}

// --- Server ---

pub fn build_router(state: Arc<NodeState>) -> Router {
    Router::new()
        .route("/api/upload", post(handle_upload))
        .route("/api/fastest-path", get(handle_fastest_path))
        .route("/api/cheapest-path", get(handle_cheapest_path))
        .route("/api/v1/status", get(handle_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on an already bound listener until the task is aborted.
pub async fn serve(listener: TcpListener, state: Arc<NodeState>) -> anyhow::Result<()> {
    let app = build_router(state);
    tracing::info!(listen_addr = %listener.local_addr()?, "HTTP API server started");
    axum::serve(listener, app).await?;
    Ok(())
}
