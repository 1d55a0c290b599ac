//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;
use flowpilot_db::models::community_member::CommunityMember;
use flowpilot_db::models::project::Project;
use flowpilot_db::models::todo::Todo;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/todos        -> list_children (todos)
/// GET    /{id}/community    -> list_children (community members)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<Project>).post(crud::create::<Project>),
        )
        .route(
            "/{id}",
            get(crud::get_by_id::<Project>)
                .put(crud::update::<Project>)
                .delete(crud::delete::<Project>),
        )
        .route("/{id}/todos", get(crud::list_children::<Todo>))
        .route(
            "/{id}/community",
            get(crud::list_children::<CommunityMember>),
        )
}
