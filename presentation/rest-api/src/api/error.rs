use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};

pub const INVALID_PRODUCT_MESSAGE: &str = "Validation error: Invalid product data";
pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid or missing API key";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// `{"error": message}` with the given status, for code outside the
/// OpenAPI handlers (middleware and the top-level fallback).
pub fn error_response(status: StatusCode, message: &str) -> Response {
    poem::web::Json(serde_json::json!({ "error": message }))
        .with_status(status)
        .into_response()
}

/// Last stop for errors no handler turned into a response. Server errors are
/// logged and replaced with a generic body; client errors raised by the
/// framework (unknown route, unreadable body) keep their status.
pub async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(error = %err, "Unhandled error");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE);
    }
    error_response(status, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_hide_server_error_detail() {
        let err = poem::Error::from_string(
            "connection refused: 10.0.0.3:27017",
            StatusCode::INTERNAL_SERVER_ERROR,
        );

        let response = render_error(err).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.into_body().into_json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn should_keep_client_error_status_and_message() {
        let err = poem::Error::from_string("bad body", StatusCode::BAD_REQUEST);

        let response = render_error(err).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.into_body().into_json().await.unwrap();
        assert_eq!(body["error"], "bad body");
    }
}
