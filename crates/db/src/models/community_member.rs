//! Community member entity model and DTOs.
//!
//! Unlike the scoped entities, a community member carries a `team` array
//! and an optional free-text `role` instead of a status.

use flowpilot_core::types::{DbId, TeamEntry, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::payload::{validate_team, validate_text};

/// A row from the `community_members` table. Owned by a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityMember {
    pub id: DbId,
    pub project_id: DbId,
    pub team: Json<Vec<TeamEntry>>,
    pub role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityMember {
    pub project_id: DbId,
    #[validate(custom(function = "validate_team"))]
    pub team: Vec<TeamEntry>,
    #[validate(length(max = 100), custom(function = "validate_text"))]
    pub role: Option<String>,
}

/// A `null` role means "leave unchanged"; there is no way to clear it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCommunityMember {
    #[validate(custom(function = "validate_team"))]
    pub team: Option<Vec<TeamEntry>>,
    #[validate(length(max = 100), custom(function = "validate_text"))]
    pub role: Option<String>,
}
