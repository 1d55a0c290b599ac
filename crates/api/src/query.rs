//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?skip=&limit=`) accepted by every list endpoint.
///
/// Validated into a [`flowpilot_core::pagination::Page`] by the
/// [`crate::extract::Pagination`] extractor.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
