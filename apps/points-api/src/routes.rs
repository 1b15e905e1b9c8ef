//! # HTTP Routes
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | `POST` | `/receipts/process` | `{"id": "..."}` |
//! | `GET` | `/receipts/{id}/points` | `{"points": N}` |
//! | `GET` | `/health` | `OK` |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use points_core::{Receipt, ReceiptId};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;
use crate::AppState;

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Response to a points query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Receipt body rejected"
        );
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large()
        } else {
            ApiError::invalid_receipt()
        }
    })?;

    let id = state.service.submit(receipt)?;
    Ok(Json(ProcessReceiptResponse { id }))
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.service.query_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
