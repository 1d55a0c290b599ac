//! Field validators for values headed into JSONB and TEXT columns.
//!
//! PostgreSQL cannot store U+0000 in either column type, so a payload that
//! contains one is rejected as a validation failure before it reaches the
//! database.

use flowpilot_core::types::{Scope, TeamEntry};
use serde_json::Value;
use validator::ValidationError;

const NUL_CODE: &str = "nul_character";

fn nul_error() -> ValidationError {
    let mut err = ValidationError::new(NUL_CODE);
    err.message = Some("must not contain the NUL character (\\u0000)".into());
    err
}

fn has_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(has_nul),
        Value::Object(map) => map.iter().any(|(k, v)| k.contains('\0') || has_nul(v)),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Keys and string values at any depth must be NUL-free.
pub fn validate_scope(scope: &Scope) -> Result<(), ValidationError> {
    if scope.iter().any(|(k, v)| k.contains('\0') || has_nul(v)) {
        return Err(nul_error());
    }
    Ok(())
}

pub fn validate_team(team: &[TeamEntry]) -> Result<(), ValidationError> {
    let dirty = team
        .iter()
        .flat_map(|entry| entry.iter())
        .any(|(k, v)| k.contains('\0') || v.contains('\0'));
    if dirty {
        return Err(nul_error());
    }
    Ok(())
}

/// For plain `TEXT` columns (`status`, `role`).
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(nul_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope(value: Value) -> Scope {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn clean_scope_passes() {
        let s = scope(json!({"title": "ok", "tags": ["a", "b"], "n": 1, "x": null}));
        assert!(validate_scope(&s).is_ok());
    }

    #[test]
    fn nul_in_nested_string_is_rejected() {
        let s = scope(json!({"outer": {"list": [1, "x\u{0}y"]}}));
        let err = validate_scope(&s).unwrap_err();
        assert_eq!(err.code, NUL_CODE);
    }

    #[test]
    fn nul_in_key_is_rejected() {
        let s = scope(json!({"a\u{0}": 1}));
        assert!(validate_scope(&s).is_err());
    }

    #[test]
    fn team_entries_are_checked() {
        let mut entry = TeamEntry::new();
        entry.insert("name".into(), "Ada".into());
        assert!(validate_team(&[entry.clone()]).is_ok());

        entry.insert("role".into(), "\u{0}".into());
        assert!(validate_team(&[entry]).is_err());
    }

    #[test]
    fn text_with_nul_is_rejected() {
        assert!(validate_text("active").is_ok());
        assert!(validate_text("act\u{0}ive").is_err());
    }
}
