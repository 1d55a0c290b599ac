//! Descriptor for the `todos` table.

use flowpilot_core::types::DbId;
use sqlx::types::Json;

use crate::models::project::Project;
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::repositories::entity_repo::{ChildEntity, Entity, EntityRepo, PgQueryAs};

/// Provides CRUD operations for todos.
pub type TodoRepo = EntityRepo<Todo>;

impl Entity for Todo {
    type Create = CreateTodo;
    type Update = UpdateTodo;

    const NAME: &'static str = "Todo";
    const TABLE: &'static str = "todos";
    const COLUMNS: &'static str =
        "id, project_id, scope, status, created_at, updated_at, deleted_at";
    const INSERT_COLUMNS: &'static str = "project_id, scope, status";
    const UPDATE_SET: &'static str = "scope = COALESCE($2, scope), status = COALESCE($3, status)";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(query: PgQueryAs<'q, Self>, input: &'q CreateTodo) -> PgQueryAs<'q, Self> {
        query
            .bind(input.project_id)
            .bind(Json(&input.scope))
            .bind(&input.status)
    }

    fn bind_update<'q>(query: PgQueryAs<'q, Self>, input: &'q UpdateTodo) -> PgQueryAs<'q, Self> {
        query
            .bind(input.scope.as_ref().map(Json))
            .bind(input.status.as_deref())
    }
}

impl ChildEntity for Todo {
    type Parent = Project;

    const PARENT_COLUMN: &'static str = "project_id";

    fn parent_of(input: &CreateTodo) -> DbId {
        input.project_id
    }
}
