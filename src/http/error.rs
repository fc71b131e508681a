//! HTTP mapping of core errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::error::CafeError;

impl CafeError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Errors render as a plain-text body holding only the message
impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}
