//! Readiness endpoint

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use mongodb::Client;
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    mongodb: bool,
    response_time_ms: u64,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state.mongo_client)
}

/// Readiness check - verifies the MongoDB connection and reports ping latency
async fn readiness_check(State(client): State<Client>) -> Response {
    let health = database::mongodb::check_health_detailed(&client).await;

    if !health.healthy {
        warn!(message = ?health.message, "MongoDB not ready");
    }

    let status = if health.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = ReadinessResponse {
        status: if health.healthy { "ready" } else { "unhealthy" },
        mongodb: health.healthy,
        response_time_ms: health.response_time_ms,
    };

    (status, Json(body)).into_response()
}
