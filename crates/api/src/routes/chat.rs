use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes for the agent chat proxy.
///
/// ```text
/// POST /chat          -> chat
/// POST /foundry/chat  -> chat (path used by existing frontends)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/foundry/chat", post(chat::chat))
}
