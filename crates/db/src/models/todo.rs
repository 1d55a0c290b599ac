//! Todo entity model and DTOs.

use flowpilot_core::status::default_todo_status;
use flowpilot_core::types::{DbId, Scope, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::payload::{validate_scope, validate_text};

/// A todo row from the `todos` table. Owned by a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub project_id: DbId,
    pub scope: Json<Scope>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new todo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    pub project_id: DbId,
    #[validate(custom(function = "validate_scope"))]
    pub scope: Scope,
    /// Defaults to `"open"` if omitted.
    #[serde(default = "default_todo_status")]
    #[validate(length(min = 1, max = 50), custom(function = "validate_text"))]
    pub status: String,
}

/// DTO for updating a todo. The owning project cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(custom(function = "validate_scope"))]
    pub scope: Option<Scope>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_text"))]
    pub status: Option<String>,
}
