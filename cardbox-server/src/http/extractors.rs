//! Custom Axum extractors
//!
//! Both reject with `ApiError::Validation` so malformed input becomes a
//! 422 before any handler touches storage.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body extractor with 422 rejections
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => "json_data",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body_unreadable",
    };
    ApiError::Validation(ValidationError::body(rejection.body_text(), kind))
}

/// Extract and validate an integer card id from path
pub struct CardId(pub i32);

impl<S> FromRequestParts<S> for CardId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(ValidationError::path("id", e.body_text(), "missing")))?;

        let id = raw.trim().parse::<i32>().map_err(|_| {
            ApiError::Validation(ValidationError::path(
                "id",
                format!("Input should be a valid integer, got '{}'", raw),
                "int_parsing",
            ))
        })?;

        Ok(Self(id))
    }
}
