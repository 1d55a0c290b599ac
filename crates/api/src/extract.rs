//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every failure shares the JSON envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use flowpilot_core::pagination::Page;
use flowpilot_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::query::PaginationParams;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProject>) -> AppResult<..> { .. }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Validated `?skip=&limit=` pair. Negative values are rejected with 422.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub Page);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state).await?;
        let page = Page::new(params.skip, params.limit)?;
        Ok(Self(page))
    }
}

/// Numeric `{id}` path segment. Anything that does not parse as an id is
/// rejected with 422.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
