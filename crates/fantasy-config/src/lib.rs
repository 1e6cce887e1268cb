//! Gateway configuration.
//!
//! One explicit [`Config`] struct is built from the process environment at
//! startup and passed to the engine client and handlers, so nothing else in
//! the gateway reads the environment ad hoc.

use serde::Serialize;

/// Environment variable overriding the upstream engine address.
pub const ENGINE_BASE_URL_VAR: &str = "ENGINE_BASE_URL";

/// Engine address used when `ENGINE_BASE_URL` is unset or empty.
/// Local dev runs the engine on :8000; compose injects its own value.
pub const DEFAULT_ENGINE_BASE_URL: &str = "http://localhost:8000";

/// Runtime configuration for the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Base URL of the upstream recommendation engine.
    pub engine_base_url: String,
    /// Address the gateway listens on.
    pub listen_addr: String,
    /// Team used when a request carries no `team_id`.
    pub default_team_id: String,
    /// How many suggestions to request from the engine.
    pub free_agent_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine_base_url: DEFAULT_ENGINE_BASE_URL.to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            default_team_id: "alpha".to_string(),
            free_agent_limit: 5,
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            engine_base_url: engine_base_url_from(std::env::var(ENGINE_BASE_URL_VAR).ok()),
            ..Self::default()
        }
    }
}

/// Resolves the engine base URL from a raw environment value.
///
/// Unset and empty both fall back to the default. The value is not validated;
/// an unusable URL surfaces when the first engine call is attempted.
pub fn engine_base_url_from(raw: Option<String>) -> String {
    match raw {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_ENGINE_BASE_URL.to_string(),
    }
}
