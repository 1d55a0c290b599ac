//! Descriptor for the `community_members` table.

use flowpilot_core::types::DbId;
use sqlx::types::Json;

use crate::models::community_member::{
    CommunityMember, CreateCommunityMember, UpdateCommunityMember,
};
use crate::models::project::Project;
use crate::repositories::entity_repo::{ChildEntity, Entity, EntityRepo, PgQueryAs};

/// Provides CRUD operations for community members.
pub type CommunityMemberRepo = EntityRepo<CommunityMember>;

impl Entity for CommunityMember {
    type Create = CreateCommunityMember;
    type Update = UpdateCommunityMember;

    const NAME: &'static str = "CommunityMember";
    const TABLE: &'static str = "community_members";
    const COLUMNS: &'static str = "id, project_id, team, role, created_at, updated_at, deleted_at";
    const INSERT_COLUMNS: &'static str = "project_id, team, role";
    const UPDATE_SET: &'static str = "team = COALESCE($2, team), role = COALESCE($3, role)";

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q CreateCommunityMember,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(input.project_id)
            .bind(Json(&input.team))
            .bind(input.role.as_deref())
    }

    fn bind_update<'q>(
        query: PgQueryAs<'q, Self>,
        input: &'q UpdateCommunityMember,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(input.team.as_ref().map(Json))
            .bind(input.role.as_deref())
    }
}

impl ChildEntity for CommunityMember {
    type Parent = Project;

    const PARENT_COLUMN: &'static str = "project_id";

    fn parent_of(input: &CreateCommunityMember) -> DbId {
        input.project_id
    }
}
