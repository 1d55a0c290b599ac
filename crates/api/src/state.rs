use std::sync::Arc;

use flowpilot_agent::AgentClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flowpilot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the remote chat agent.
    pub agent: Arc<AgentClient>,
}
