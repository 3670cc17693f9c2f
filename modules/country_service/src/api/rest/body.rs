//! JSON request body extractor
//!
//! Bodies that do not deserialize into the target DTO are answered with the
//! same `400` problem document as a failed field rule.

use super::error::Problem;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body whose rejections are problem documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Rejected unreadable request body");
                Err(rejection_problem(rejection))
            }
        }
    }
}

fn rejection_problem(rejection: JsonRejection) -> Problem {
    let problem = match &rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
        }
        _ => {
            let status = rejection.status();
            Problem::new(status, status.canonical_reason().unwrap_or("Bad Request"))
        }
    };

    problem.with_detail(rejection.body_text())
}
