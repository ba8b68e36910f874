//! HTTP routes. The core pipeline has no HTTP surface; the app exposes
//! only a static liveness signal.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint: static liveness, no dependency probing.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Build the application router.
pub fn build_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
