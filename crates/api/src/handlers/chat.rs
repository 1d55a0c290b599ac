//! Handler for the chat proxy.

use axum::extract::State;
use axum::Json;
use flowpilot_core::types::Scope;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(default)]
    pub context: Option<Scope>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The agent's JSON answer, passed through untouched.
    pub response: serde_json::Value,
}

/// POST /api/v1/chat
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let response = state
        .agent
        .chat(&input.message, input.context.as_ref())
        .await?;
    Ok(Json(ChatResponse { response }))
}
