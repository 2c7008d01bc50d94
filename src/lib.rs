//! GreenLend Scoring Service
//!
//! Scores a loan applicant's default risk and environmental profile, then
//! derives a lending decision and a recommended interest rate.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     GREENLEND SERVICE                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────┐   ┌────────────────────┐  │
//! │  │  API      │   │  Risk       │   │  Scoring Core      │  │
//! │  │  Gateway  │──▶│  Estimator  │──▶│  green / decision  │  │
//! │  │  (Axum)   │   │  (ONNX)     │   │  / pricing         │  │
//! │  └───────────┘   └─────────────┘   └────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scoring core is pure and stateless; the ONNX session is loaded once
//! at startup and shared read-only across requests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use logic::estimator::RiskEstimator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<dyn RiskEstimator>,
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict))
        // Legacy route kept for older clients
        .route("/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
