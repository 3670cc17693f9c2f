//! Integer route parameter
//!
//! `{id}` only matches integer segments; anything else is treated as an
//! unknown route and answered with `404`.

use crate::contract::Id;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};

/// Integer `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub Id);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        raw.parse::<Id>()
            .map(IdParam)
            .map_err(|_| StatusCode::NOT_FOUND)
    }
}
