//! Repository layer.
//!
//! All four tables share one generic implementation, [`EntityRepo`];
//! the per-table modules only describe columns and bindings. Methods are
//! async associated functions that accept `&PgPool` as the first argument.

pub mod community_member_repo;
pub mod entity_repo;
pub mod project_repo;
pub mod status_report_repo;
pub mod todo_repo;

pub use community_member_repo::CommunityMemberRepo;
pub use entity_repo::{ChildEntity, Entity, EntityRepo};
pub use project_repo::ProjectRepo;
pub use status_report_repo::StatusReportRepo;
pub use todo_repo::TodoRepo;
