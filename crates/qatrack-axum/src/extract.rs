//! Request extractors.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Header carrying the authenticated user id, set by the identity layer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller's user id, taken from [`USER_ID_HEADER`].
///
/// Only presence is checked here; the role resolver decides whether the id
/// names a real profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub String);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| HttpError::Unauthenticated(format!("missing {USER_ID_HEADER} header")))?;
        let id = value
            .to_str()
            .map_err(|_| HttpError::Unauthenticated(format!("{USER_ID_HEADER} is not valid text")))?
            .trim();
        if id.is_empty() {
            return Err(HttpError::Unauthenticated(format!(
                "{USER_ID_HEADER} header is empty"
            )));
        }
        Ok(Self(id.to_string()))
    }
}

/// JSON body whose rejections render as `INVALID_INPUT` errors.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
