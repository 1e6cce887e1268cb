//! Shared server state.

use std::sync::Arc;

use fantasy_config::Config;
use fantasy_engine::FreeAgentSource;

/// State accessible from all handlers.
///
/// Holds only immutable data; handlers never coordinate with each other.
pub struct ServerState {
    pub config: Config,
    pub engine: Arc<dyn FreeAgentSource>,
}
