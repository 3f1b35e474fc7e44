//! Request extractors and middleware that answer failures with
//! [`GalleryError`] bodies instead of axum's plain-text rejections.

use std::time::Duration;

use axum::extract::{FromRequestParts, Query, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::GalleryError;

/// Query-string extractor for string-valued parameter structs.
///
/// Works like `axum::extract::Query<T>`, except that a repeated key keeps
/// its first value and any rejection becomes
/// [`GalleryError::InvalidRequest`].
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GalleryError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| GalleryError::InvalidRequest(rejection.body_text()))?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|e| GalleryError::InvalidRequest(e.to_string()))
    }
}

/// Fails requests that run longer than the limit held in the middleware
/// state with [`GalleryError::Timeout`].
///
/// # Errors
///
/// Returns [`GalleryError::Timeout`] when the inner service does not
/// finish in time.
pub async fn enforce_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Result<Response, GalleryError> {
    tokio::time::timeout(limit, next.run(request))
        .await
        .map_err(|_| GalleryError::Timeout(limit))
}
