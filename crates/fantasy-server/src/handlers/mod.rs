//! HTTP route handlers for the gateway.

pub mod free_agents;

use axum::Json;
use serde::Serialize;

/// Fixed body of the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Root info page pointing at the usable endpoint.
pub async fn root() -> &'static str {
    "fantasy-web is up. Try /freeagents?team_id=alpha\n"
}
