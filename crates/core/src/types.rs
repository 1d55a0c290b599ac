use std::collections::BTreeMap;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Free-form JSON object attached to projects, todos and status reports.
///
/// The store never looks inside it; callers own the schema.
pub type Scope = serde_json::Map<String, serde_json::Value>;

/// One entry of a community member's `team` array.
pub type TeamEntry = BTreeMap<String, String>;
