//! # Receipt Points API
//!
//! HTTP front end for receipt ingestion and points lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points API Server                               │
//! │                                                                         │
//! │  Client ───► axum (8080) ───► ReceiptService ───► InMemoryReceiptStore │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                              points-core                                │
//! │                         (validation, scoring)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `POINTS_API_HOST` - Bind address (default: 127.0.0.1)
//! - `POINTS_API_PORT` - HTTP port (default: 8080)
//! - `POINTS_API_MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

use std::sync::Arc;

use axum::Router;
use points_store::{InMemoryReceiptStore, ReceiptRepository};

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use service::{ReceiptService, ServiceError, ServiceResult};

/// Shared application state.
pub struct AppState {
    pub service: ReceiptService<dyn ReceiptRepository>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state backed by a fresh, empty in-memory store.
    pub fn new(config: ApiConfig) -> Self {
        AppState::with_store(config, Arc::new(InMemoryReceiptStore::new()))
    }

    /// Creates state over an existing store.
    pub fn with_store(config: ApiConfig, store: Arc<dyn ReceiptRepository>) -> Self {
        AppState {
            service: ReceiptService::new(store),
            config,
        }
    }
}

/// Builds the full application with a fresh store.
pub fn app(config: ApiConfig) -> Router {
    routes::router(Arc::new(AppState::new(config)))
}

/// Builds the application over an existing store.
pub fn app_with_store(config: ApiConfig, store: Arc<dyn ReceiptRepository>) -> Router {
    routes::router(Arc::new(AppState::with_store(config, store)))
}
