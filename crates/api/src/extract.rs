//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every 400 carries the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use campus_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Path<T>` with a JSON 400 on malformed segments.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `Query<T>` with a JSON 400 on malformed query strings.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Deserializes a JSON body and runs its `validator` rules.
///
/// Missing or mistyped fields and malformed JSON become
/// [`AppError::BadRequest`]; rule violations become
/// `CoreError::Validation`. Both are 400s, returned before the handler runs.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        validate_input(&value)?;
        Ok(ValidatedJson(value))
    }
}
