//! Route definitions for the `/community` resource (community members).

use axum::routing::get;
use axum::Router;
use flowpilot_db::models::community_member::CommunityMember;

use crate::handlers::crud;
use crate::state::AppState;

/// Routes mounted at `/community`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<CommunityMember>).post(crud::create_child::<CommunityMember>),
        )
        .route(
            "/{id}",
            get(crud::get_by_id::<CommunityMember>)
                .put(crud::update::<CommunityMember>)
                .delete(crud::delete::<CommunityMember>),
        )
}
