//! Descriptor for the `projects` table.

use flowpilot_core::types::DbId;
use sqlx::types::Json;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::entity_repo::{Entity, EntityRepo, PgQueryAs};

/// Provides CRUD operations for projects.
pub type ProjectRepo = EntityRepo<Project>;

impl Entity for Project {
    type Create = CreateProject;
    type Update = UpdateProject;

    const NAME: &'static str = "Project";
    const TABLE: &'static str = "projects";
    const COLUMNS: &'static str = "id, scope, status, created_at, updated_at, deleted_at";
    const INSERT_COLUMNS: &'static str = "scope, status";
    const UPDATE_SET: &'static str = "scope = COALESCE($2, scope), status = COALESCE($3, status)";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(query: PgQueryAs<'q, Self>, input: &'q CreateProject) -> PgQueryAs<'q, Self> {
        query.bind(Json(&input.scope)).bind(&input.status)
    }

    fn bind_update<'q>(query: PgQueryAs<'q, Self>, input: &'q UpdateProject) -> PgQueryAs<'q, Self> {
        query
            .bind(input.scope.as_ref().map(Json))
            .bind(input.status.as_deref())
    }
}
