//! Generic soft-delete CRUD handlers.
//!
//! One set of handlers serves every entity; routes instantiate them with the
//! concrete type, e.g. `get(crud::get_by_id::<Project>)`. A soft-deleted row
//! is indistinguishable from a missing one: both yield 404.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use flowpilot_core::error::CoreError;
use flowpilot_core::types::DbId;
use flowpilot_db::repositories::{ChildEntity, Entity, EntityRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, Pagination, ValidatedJson};
use crate::state::AppState;

fn not_found<E: Entity>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::NAME,
        id,
    })
}

/// POST for root entities (no parent to check).
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<E::Create>,
) -> AppResult<(StatusCode, Json<E>)> {
    let row = EntityRepo::<E>::create(&state.pool, &input).await?;
    tracing::info!(entity = E::NAME, id = row.id(), "Created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// POST for owned entities. The referenced parent must be live.
pub async fn create_child<E: ChildEntity>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<E::Create>,
) -> AppResult<(StatusCode, Json<E>)> {
    let parent_id = E::parent_of(&input);
    if !EntityRepo::<E::Parent>::exists(&state.pool, parent_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{} with id {parent_id} does not exist",
            <E::Parent as Entity>::NAME
        ))));
    }

    let row = EntityRepo::<E>::create(&state.pool, &input).await?;
    tracing::info!(entity = E::NAME, id = row.id(), parent_id, "Created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET collection of live rows.
pub async fn list<E: Entity>(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> AppResult<Json<Vec<E>>> {
    let rows = EntityRepo::<E>::list(&state.pool, page).await?;
    Ok(Json(rows))
}

/// GET one live row.
pub async fn get_by_id<E: Entity>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<E>> {
    let row = EntityRepo::<E>::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(row))
}

/// PUT partial update; omitted or `null` fields are left untouched.
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<E::Update>,
) -> AppResult<Json<E>> {
    let row = EntityRepo::<E>::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(entity = E::NAME, id, "Updated");
    Ok(Json(row))
}

/// DELETE marks the row deleted. Children are left as they are.
pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    let deleted = EntityRepo::<E>::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(entity = E::NAME, id, "Soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<E>(id))
    }
}

/// GET live children of a parent. An unknown parent yields an empty list.
pub async fn list_children<C: ChildEntity>(
    State(state): State<AppState>,
    IdPath(parent_id): IdPath,
    Pagination(page): Pagination,
) -> AppResult<Json<Vec<C>>> {
    let rows = EntityRepo::<C>::list_by_parent(&state.pool, parent_id, page).await?;
    Ok(Json(rows))
}
