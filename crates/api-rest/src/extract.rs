//! Request body extraction with required-field validation.

use crate::error::ApiError;
use api_shared::Validate;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body that has passed [`Validate`].
///
/// Unlike `axum::Json`, every rejection is reported through [`ApiError`] so
/// clients get the same error body for malformed JSON, missing fields and
/// blank values.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(r) => {
                    ApiError::UnsupportedMediaType(r.body_text())
                }
                other => ApiError::BadRequest(other.body_text()),
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}
