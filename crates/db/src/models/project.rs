//! Project entity model and DTOs.

use flowpilot_core::status::default_project_status;
use flowpilot_core::types::{DbId, Scope, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::payload::{validate_scope, validate_text};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub scope: Json<Scope>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "validate_scope"))]
    pub scope: Scope,
    /// Defaults to `"active"` if omitted.
    #[serde(default = "default_project_status")]
    #[validate(length(min = 1, max = 50), custom(function = "validate_text"))]
    pub status: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(custom(function = "validate_scope"))]
    pub scope: Option<Scope>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_text"))]
    pub status: Option<String>,
}
