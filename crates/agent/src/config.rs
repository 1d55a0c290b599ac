use std::time::Duration;

/// Connection settings for the remote agent service.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Base URL of the agent service, e.g. `https://foundry.example.com`.
    pub base_url: String,
    /// Bearer credential sent in the `Authorization` header.
    pub api_key: String,
    /// Agent identifier, sent in the body and used in the endpoint path.
    pub agent_id: String,
    /// Whole-call timeout for a single chat request.
    pub timeout: Duration,
}

impl AgentConfig {
    /// Default per-call timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `FOUNDRY_BASE_URL`     | (required) |
    /// | `FOUNDRY_API_KEY`      | (required) |
    /// | `FOUNDRY_AGENT_ID`     | (required) |
    /// | `FOUNDRY_TIMEOUT_SECS` | `30`       |
    pub fn from_env() -> Self {
        let base_url = std::env::var("FOUNDRY_BASE_URL").expect("FOUNDRY_BASE_URL must be set");
        let api_key = std::env::var("FOUNDRY_API_KEY").expect("FOUNDRY_API_KEY must be set");
        let agent_id = std::env::var("FOUNDRY_AGENT_ID").expect("FOUNDRY_AGENT_ID must be set");

        let timeout_secs: u64 = std::env::var("FOUNDRY_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("FOUNDRY_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            api_key,
            agent_id,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Full URL of the chat endpoint for the configured agent.
    pub fn chat_endpoint(&self) -> String {
        format!(
            "{}/api/agents/{}/chat",
            self.base_url.trim_end_matches('/'),
            self.agent_id
        )
    }
}
