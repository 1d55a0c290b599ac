use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flowpilot_agent::AgentError;
use flowpilot_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{ "error", "code" }` for most failures, plus `details` where the caller
/// can act on it (field errors, agent failures).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `flowpilot_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The remote chat agent call failed.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// The request body parsed but failed field validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The request body could not be parsed.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The query string could not be parsed.
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    /// A path segment (e.g. `{id}`) could not be parsed.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => envelope(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => envelope(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Agent errors ---
            AppError::Agent(err) => {
                tracing::warn!(
                    kind = err.kind(),
                    status = err.status_code(),
                    details = err.details(),
                    "Agent call failed"
                );
                let status =
                    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
                let body = json!({
                    "error": err.kind(),
                    "message": err.message(),
                    "details": err.details(),
                    "code": agent_code(err),
                });
                (status, body)
            }

            // --- Request shape errors ---
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "Request validation failed",
                    "code": "VALIDATION_ERROR",
                    "details": errors,
                }),
            ),
            AppError::InvalidBody(JsonRejection::MissingJsonContentType(rejection)) => envelope(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                rejection.body_text(),
            ),
            AppError::InvalidBody(rejection) => envelope(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),
            AppError::InvalidQuery(rejection) => envelope(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),
            AppError::InvalidPath(rejection) => envelope(
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn envelope(
    status: StatusCode,
    code: &'static str,
    message: String,
) -> (StatusCode, serde_json::Value) {
    (status, json!({ "error": message, "code": code }))
}

fn internal() -> (StatusCode, serde_json::Value) {
    envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn agent_code(err: &AgentError) -> &'static str {
    match err {
        AgentError::Remote { .. } => "AGENT_REMOTE_ERROR",
        AgentError::Timeout { .. } => "AGENT_TIMEOUT",
        AgentError::Unreachable { .. } => "AGENT_UNREACHABLE",
        AgentError::Unknown { .. } => "AGENT_UNKNOWN_ERROR",
    }
}

/// Classify a sqlx error into an HTTP status and JSON body.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations map to 422 (the referenced parent is gone).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => envelope(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL foreign key violation: error code 23503
            if db_err.code().as_deref() == Some("23503") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return envelope(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    format!("Referenced parent does not exist ({constraint})"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
