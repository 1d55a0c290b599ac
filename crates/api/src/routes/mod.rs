pub mod chat;
pub mod community;
pub mod health;
pub mod project;
pub mod status_report;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/todos                             live todos of a project
/// /projects/{id}/community                         live community members of a project
///
/// /todos                                           list, create
/// /todos/{id}                                      get, update, delete
/// /todos/{id}/status-reports                       live status reports of a todo
///
/// /status-reports                                  list, create
/// /status-reports/{id}                             get, update, delete
///
/// /community                                       list, create
/// /community/{id}                                  get, update, delete
///
/// /chat                                            forward a message to the agent (POST)
/// /foundry/chat                                    same, legacy path (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/todos", todo::router())
        .nest("/status-reports", status_report::router())
        .nest("/community", community::router())
        .merge(chat::router())
}
