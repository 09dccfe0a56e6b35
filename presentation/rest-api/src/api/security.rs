use std::sync::Arc;

use poem::http::{HeaderMap, StatusCode};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::api::error::{UNAUTHORIZED_MESSAGE, error_response};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Checks the `x-api-key` header against the configured key.
///
/// # Errors
///
/// Returns `StatusCode::UNAUTHORIZED` if the header is absent, not valid
/// text, or does not match `expected` exactly.
pub(crate) fn validate_api_key(headers: &HeaderMap, expected: &str) -> Result<(), StatusCode> {
    let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());

    if provided == Some(expected) {
        Ok(())
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

/// Rejects every request without the shared API key before it reaches
/// routing, so unknown paths are also answered with 401.
pub struct ApiKeyGate {
    expected: Arc<str>,
}

impl ApiKeyGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: Arc::from(expected.into()),
        }
    }
}

impl<E: Endpoint> Middleware<E> for ApiKeyGate {
    type Output = ApiKeyGateEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ApiKeyGateEndpoint {
            inner: ep,
            expected: self.expected.clone(),
        }
    }
}

pub struct ApiKeyGateEndpoint<E> {
    inner: E,
    expected: Arc<str>,
}

impl<E: Endpoint> Endpoint for ApiKeyGateEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if validate_api_key(req.headers(), &self.expected).is_err() {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "Rejected request without a valid API key"
            );
            return Ok(error_response(
                StatusCode::UNAUTHORIZED,
                UNAUTHORIZED_MESSAGE,
            ));
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}
