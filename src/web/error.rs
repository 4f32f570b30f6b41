//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::contact::ContactError;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad request (400).
    BadRequest,
    /// Not found (404).
    NotFound,
    /// Payload too large (413).
    PayloadTooLarge,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body: `{ "error": "..." }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create a payload too large error.
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The generic fault reply. Callers log the cause themselves.
    pub fn fault() -> Self {
        Self::internal(ContactError::ServerFault(String::new()).to_string())
    }

    /// Create an error from validator errors.
    ///
    /// Classified through [`ContactError`], so a missing value is reported
    /// before a malformed one.
    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        ContactError::from(errors).into()
    }

    /// Error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: self.message,
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match &err {
            ContactError::MissingField | ContactError::InvalidEmail => {
                ApiError::bad_request(err.to_string())
            }
            ContactError::ServerFault(detail) => {
                tracing::error!("Contact form error: {}", detail);
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl From<crate::SiteError> for ApiError {
    fn from(err: crate::SiteError) -> Self {
        tracing::error!("Internal error: {}", err);
        ApiError::fault()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_constructors() {
        assert_eq!(ApiError::bad_request("bad").code(), ErrorCode::BadRequest);
        assert_eq!(ApiError::not_found("missing").code(), ErrorCode::NotFound);
        assert_eq!(
            ApiError::payload_too_large("big").code(),
            ErrorCode::PayloadTooLarge
        );
        assert_eq!(ApiError::internal("error").code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_fault_message() {
        let err = ApiError::fault();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_from_contact_error() {
        let err: ApiError = ContactError::MissingField.into();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), "All fields are required");

        let err: ApiError = ContactError::InvalidEmail.into();
        assert_eq!(err.message(), "Invalid email address");

        let err: ApiError = ContactError::ServerFault("sink down".to_string()).into();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(!err.message().contains("sink down"));
    }

    #[test]
    fn test_from_validation_errors_prefers_required() {
        let errors = crate::contact::ContactSubmission::new("", "bad", "Hi")
            .validate()
            .unwrap_err();

        let err = ApiError::from_validation_errors(errors);

        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn test_from_validation_errors_invalid_email() {
        let errors = crate::contact::ContactSubmission::new("Ana", "bad", "Hi")
            .validate()
            .unwrap_err();

        let err = ApiError::from_validation_errors(errors);

        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), "Invalid email address");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        use http_body_util::BodyExt;

        let response = ApiError::bad_request("Invalid email address").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid email address" }));
    }
}
