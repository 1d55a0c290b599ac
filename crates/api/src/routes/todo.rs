//! Route definitions for the `/todos` resource.

use axum::routing::get;
use axum::Router;
use flowpilot_db::models::status_report::StatusReport;
use flowpilot_db::models::todo::Todo;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/todos`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create_child (project must be live)
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/status-reports   -> list_children (status reports)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<Todo>).post(crud::create_child::<Todo>))
        .route(
            "/{id}",
            get(crud::get_by_id::<Todo>)
                .put(crud::update::<Todo>)
                .delete(crud::delete::<Todo>),
        )
        .route(
            "/{id}/status-reports",
            get(crud::list_children::<StatusReport>),
        )
}
