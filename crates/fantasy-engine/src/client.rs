//! Reqwest client for the engine's free-agent recommendation endpoint.

use async_trait::async_trait;
use fantasy_config::Config;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One free-agent pickup suggestion as returned by the engine.
///
/// The gateway decodes and re-serializes these records without interpreting
/// any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaSuggestion {
    pub player_id: String,
    pub delta_value: f64,
    pub suggested_faab: i64,
    pub rationale: String,
}

/// Errors from a call to the engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The engine could not be reached (DNS, connect, timeout).
    #[error("engine unreachable: {0}")]
    Transport(String),

    /// The engine responded with a non-200 status.
    #[error("engine returned {0}")]
    UpstreamStatus(StatusCode),

    /// The engine responded 200 but the body was not the expected JSON array.
    #[error("failed to decode engine response: {0}")]
    Decode(String),
}

/// Source of free-agent suggestions.
///
/// Implemented by [`EngineClient`]; handler tests substitute a stub.
#[async_trait]
pub trait FreeAgentSource: Send + Sync {
    /// Fetches up to `limit` suggestions for the given team.
    async fn free_agents(&self, team_id: &str, limit: u32) -> Result<Vec<FaSuggestion>, EngineError>;
}

/// HTTP client bound to one engine base URL.
///
/// Constructed once at startup and shared across requests; the underlying
/// `reqwest::Client` pools connections.
pub struct EngineClient {
    client: Client,
    base_url: String,
}

impl EngineClient {
    /// Creates a client for the configured engine address.
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.engine_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FreeAgentSource for EngineClient {
    async fn free_agents(&self, team_id: &str, limit: u32) -> Result<Vec<FaSuggestion>, EngineError> {
        let url = format!("{}/recommend/free-agents", self.base_url);
        debug!("GET {} team_id={} limit={}", url, team_id, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("team_id", team_id), ("limit", &limit.to_string())])
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(EngineError::UpstreamStatus(status));
        }

        response
            .json()
            .await
            .map_err(|e| EngineError::Decode(e.to_string()))
    }
}
