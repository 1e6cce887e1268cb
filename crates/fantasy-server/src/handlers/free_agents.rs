//! Free-agent recommendation handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use fantasy_engine::FaSuggestion;
use serde::Deserialize;
use tracing::error;

use crate::error::AppError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct FreeAgentsQuery {
    pub team_id: Option<String>,
}

/// Forwards the free-agent query to the engine and republishes the result.
///
/// A missing or empty `team_id` falls back to the configured default before
/// the engine is called.
pub async fn free_agents(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<FreeAgentsQuery>,
) -> Result<Json<Vec<FaSuggestion>>, AppError> {
    let team_id = query
        .team_id
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| state.config.default_team_id.clone());

    let items = state
        .engine
        .free_agents(&team_id, state.config.free_agent_limit)
        .await
        .map_err(|e| {
            error!("engine call failed for team {}: {}", team_id, e);
            AppError::BadGateway(e.to_string())
        })?;

    Ok(Json(items))
}
