//! Readiness endpoint

use axum::{routing::get, Json, Router};

use crate::models::HealthResponse;

/// Static readiness text returned by `GET /`
pub const READY_MESSAGE: &str = "cardbox API + PostgreSQL ready";

/// GET /
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: READY_MESSAGE,
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
