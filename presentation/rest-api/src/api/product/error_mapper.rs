use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{
    ErrorResponse, INTERNAL_ERROR_MESSAGE, INVALID_PRODUCT_MESSAGE, IntoErrorResponse,
    NOT_FOUND_MESSAGE,
};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::InvalidData { .. } => (StatusCode::BAD_REQUEST, INVALID_PRODUCT_MESSAGE),
            ProductError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
