//! Row types and request DTOs, one module per table.

pub mod community_member;
pub mod payload;
pub mod project;
pub mod status_report;
pub mod todo;
