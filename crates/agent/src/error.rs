//! Failure taxonomy for agent calls.

/// Why a chat call did not produce a response body.
///
/// `details` always carries the raw cause (transport error text or the
/// remote's response body) for the caller's diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// The agent answered with a 4xx/5xx status.
    #[error("Agent returned HTTP {status}: {details}")]
    Remote { status: u16, details: String },

    /// No response arrived before the configured timeout.
    #[error("Agent request timed out: {details}")]
    Timeout { details: String },

    /// The agent could not be reached (refused, DNS, TLS, reset).
    #[error("Agent unreachable: {details}")]
    Unreachable { details: String },

    /// Anything else, including an unparseable success body.
    #[error("Unexpected agent error: {details}")]
    Unknown { details: String },
}

impl AgentError {
    /// Classify a transport-level error from the HTTP client.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let details = err.to_string();
        let classified = if err.is_timeout() {
            AgentError::Timeout { details }
        } else if err.is_connect() || err.is_request() {
            AgentError::Unreachable { details }
        } else {
            AgentError::Unknown { details }
        };
        tracing::debug!(kind = classified.kind(), error = %err, "Agent transport failure");
        classified
    }

    /// Short machine-readable kind, used as the `error` field of the envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AgentError::Remote { .. } => "RemoteError",
            AgentError::Timeout { .. } => "Timeout",
            AgentError::Unreachable { .. } => "Unreachable",
            AgentError::Unknown { .. } => "Unknown",
        }
    }

    /// HTTP status to surface to the caller.
    ///
    /// Remote errors propagate the agent's own status.
    pub fn status_code(&self) -> u16 {
        match self {
            AgentError::Remote { status, .. } => *status,
            AgentError::Timeout { .. } => 504,
            AgentError::Unreachable { .. } => 503,
            AgentError::Unknown { .. } => 500,
        }
    }

    /// Human-readable summary for the `message` field of the envelope.
    pub fn message(&self) -> String {
        match self {
            AgentError::Remote { status, .. } => format!("Agent returned status {status}"),
            AgentError::Timeout { .. } => "The request to the agent timed out".to_string(),
            AgentError::Unreachable { .. } => "Failed to connect to the agent".to_string(),
            AgentError::Unknown { .. } => "An unexpected error occurred".to_string(),
        }
    }

    /// Raw cause text.
    pub fn details(&self) -> &str {
        match self {
            AgentError::Remote { details, .. }
            | AgentError::Timeout { details }
            | AgentError::Unreachable { details }
            | AgentError::Unknown { details } => details,
        }
    }
}
