//! Validated parameter and JSON extractors
//!
//! Malformed or invalid input is rejected with a 400 failure envelope instead
//! of reaching a handler.

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::errors::ApiError;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Named parameters read from a form body or, failing that, the query string
///
/// Clients send login and register parameters either way, so both are accepted.
///
/// ```rust,ignore
/// async fn login(ValidatedParams(params): ValidatedParams<LoginParams>) { /* ... */ }
/// ```
pub struct ValidatedParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(FORM_URLENCODED));

        let value = if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            value
        } else {
            let Query(value) = Query::<T>::try_from_uri(req.uri())
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            value
        };

        value.validate()?;
        Ok(Self(value))
    }
}

/// JSON body extractor that validates after deserializing
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
