//! Status report entity model and DTOs.

use flowpilot_core::status::default_status_report_status;
use flowpilot_core::types::{DbId, Scope, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::payload::{validate_scope, validate_text};

/// A status report row from the `status_reports` table. Owned by a todo.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusReport {
    pub id: DbId,
    pub todo_id: DbId,
    pub scope: Json<Scope>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatusReport {
    pub todo_id: DbId,
    #[validate(custom(function = "validate_scope"))]
    pub scope: Scope,
    /// Defaults to `"draft"` if omitted.
    #[serde(default = "default_status_report_status")]
    #[validate(length(min = 1, max = 50), custom(function = "validate_text"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatusReport {
    #[validate(custom(function = "validate_scope"))]
    pub scope: Option<Scope>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_text"))]
    pub status: Option<String>,
}
