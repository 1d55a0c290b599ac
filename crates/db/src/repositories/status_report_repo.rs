//! Descriptor for the `status_reports` table.

use flowpilot_core::types::DbId;
use sqlx::types::Json;

use crate::models::status_report::{CreateStatusReport, StatusReport, UpdateStatusReport};
use crate::models::todo::Todo;
use crate::repositories::entity_repo::{ChildEntity, Entity, EntityRepo, PgQueryAs};

/// Provides CRUD operations for status reports.
pub type StatusReportRepo = EntityRepo<StatusReport>;

impl Entity for StatusReport {
    type Create = CreateStatusReport;
    type Update = UpdateStatusReport;

    const NAME: &'static str = "StatusReport";
    const TABLE: &'static str = "status_reports";
    const COLUMNS: &'static str = "id, todo_id, scope, status, created_at, updated_at, deleted_at";
    const INSERT_COLUMNS: &'static str = "todo_id, scope, status";
    const UPDATE_SET: &'static str = "scope = COALESCE($2, scope), status = COALESCE($3, status)";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q CreateStatusReport,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(input.todo_id)
            .bind(Json(&input.scope))
            .bind(&input.status)
    }

    fn bind_update<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q UpdateStatusReport,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(input.scope.as_ref().map(Json))
            .bind(input.status.as_deref())
    }
}

impl ChildEntity for StatusReport {
    type Parent = Todo;

    const PARENT_COLUMN: &'static str = "todo_id";

    fn parent_of(input: &CreateStatusReport) -> DbId {
        input.todo_id
    }
}
