//! HTTP client for the agent chat endpoint.

use flowpilot_core::types::Scope;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::config::AgentConfig;
use crate::error::AgentError;

/// Outbound request body for `POST /api/agents/{agent_id}/chat`.
#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    agent_id: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a Scope>,
}

/// Sends chat messages to a single configured agent.
///
/// Cheap to share behind an `Arc`; the inner [`reqwest::Client`] pools
/// connections across calls.
pub struct AgentClient {
    client: reqwest::Client,
    config: AgentConfig,
    endpoint: String,
}

impl AgentClient {
    /// Build a client whose every request is bounded by `config.timeout`.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AgentError::Unknown {
                details: e.to_string(),
            })?;
        let endpoint = config.chat_endpoint();
        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Forward `message` (and `context`, if any) to the agent.
    ///
    /// On a 2xx/3xx answer the parsed JSON body is returned as-is. An empty
    /// context object is not forwarded.
    pub async fn chat(
        &self,
        message: &str,
        context: Option<&Scope>,
    ) -> Result<serde_json::Value, AgentError> {
        let payload = ChatPayload {
            agent_id: &self.config.agent_id,
            message,
            context: context.filter(|c| !c.is_empty()),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            has_context = payload.context.is_some(),
            "Sending chat message to agent"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(AgentError::from_transport)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let details = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            tracing::debug!(status = status.as_u16(), "Agent answered with an error status");
            return Err(AgentError::Remote {
                status: status.as_u16(),
                details,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AgentError::Timeout {
                        details: e.to_string(),
                    }
                } else {
                    AgentError::Unknown {
                        details: e.to_string(),
                    }
                }
            })
    }
}
