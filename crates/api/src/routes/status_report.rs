//! Route definitions for the `/status-reports` resource.

use axum::routing::get;
use axum::Router;
use flowpilot_db::models::status_report::StatusReport;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/status-reports`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<StatusReport>).post(crud::create_child::<StatusReport>),
        )
        .route(
            "/{id}",
            get(crud::get_by_id::<StatusReport>)
                .put(crud::update::<StatusReport>)
                .delete(crud::delete::<StatusReport>),
        )
}
