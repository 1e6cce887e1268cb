//! Outbound client for the recommendation engine API.
//!
//! The engine is an opaque upstream HTTP service; this crate exposes its one
//! consumed operation (free-agent suggestions) behind the [`FreeAgentSource`]
//! trait so the server can swap in a stub under test.

mod client;

pub use client::{EngineClient, EngineError, FaSuggestion, FreeAgentSource};
