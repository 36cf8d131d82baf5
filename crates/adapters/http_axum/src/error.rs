//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use carwash_domain::error::CarwashError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CarwashError`] to an HTTP response with appropriate status code.
pub struct ApiError(CarwashError);

impl From<CarwashError> for ApiError {
    fn from(err: CarwashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CarwashError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CarwashError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CarwashError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Credenciales inválidas".to_string())
            }
            CarwashError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
