//! Offset/limit pagination shared by every list endpoint.
//!
//! Unlike search endpoints, list endpoints do not clamp: a negative `skip`
//! or `limit` is a caller error and is rejected before any query runs.
//! Values past the end of the collection are fine and yield an empty page.

use crate::error::CoreError;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// A validated offset/limit pair, safe to bind straight into `OFFSET`/`LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// Build a page from raw query values, applying defaults.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if skip < 0 {
            return Err(CoreError::Validation(format!(
                "skip must be >= 0, got {skip}"
            )));
        }
        if limit < 0 {
            return Err(CoreError::Validation(format!(
                "limit must be >= 0, got {limit}"
            )));
        }

        Ok(Self { skip, limit })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_when_both_missing() {
        assert_eq!(Page::new(None, None).unwrap(), Page::default());
        assert_eq!(Page::default().limit, 100);
    }

    #[test]
    fn passes_through_valid_values() {
        let page = Page::new(Some(20), Some(5)).unwrap();
        assert_eq!(page, Page { skip: 20, limit: 5 });
    }

    #[test]
    fn zero_limit_is_allowed() {
        assert_eq!(Page::new(None, Some(0)).unwrap().limit, 0);
    }

    #[test]
    fn rejects_negative_skip() {
        assert_matches!(Page::new(Some(-1), None), Err(CoreError::Validation(msg)) if msg.contains("skip"));
    }

    #[test]
    fn rejects_negative_limit() {
        assert_matches!(Page::new(None, Some(-10)), Err(CoreError::Validation(msg)) if msg.contains("limit"));
    }
}
