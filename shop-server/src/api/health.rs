//! Health check route
//!
//! | Path | Method | Description | Auth |
//! |------|------|------|------|
//! | /health | GET | health check | none |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok)
    status: &'static str,
    /// Crate version
    version: &'static str,
    environment: String,
    /// Number of catalog products
    products: usize,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        products: state.catalog.list_all().len(),
    })
}
