//! Validated JSON extraction.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// The body is decoded as JSON whatever the `Content-Type` says. A body that
/// cannot be read or decoded, or is not a JSON object, yields the generic 500
/// fault; a decoded value that fails validation yields a 400 with the
/// validation message.
///
/// # Example
///
/// ```ignore
/// use excelsior::web::dto::ValidatedJson;
///
/// async fn submit(
///     ValidatedJson(payload): ValidatedJson<ContactSubmission>,
/// ) -> Result<Json<ContactResponse>, ApiError> {
///     // payload is already validated
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                tracing::warn!("Request body too large");
                return ApiError::payload_too_large("Request body too large");
            }
            tracing::error!(error = %e, "Failed to read request body");
            ApiError::fault()
        })?;

        let json: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, "Invalid JSON request body");
            ApiError::fault()
        })?;

        // Derived struct decoding also accepts sequences; only objects are bodies.
        if !json.is_object() {
            tracing::error!("JSON request body is not an object");
            return Err(ApiError::fault());
        }

        let value: T = serde_json::from_value(json).map_err(|e| {
            tracing::error!(error = %e, "Invalid JSON request body");
            ApiError::fault()
        })?;

        value.validate().map_err(|e| {
            tracing::debug!(errors = %e, "Request validation failed");
            ApiError::from_validation_errors(e)
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactSubmission;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    fn request(body: &'static str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body_without_content_type() {
        let req = request(r#"{"name":"Ana","email":"ana@x.com","message":"Hi"}"#);

        let ValidatedJson(sub) = ValidatedJson::<ContactSubmission>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(sub, ContactSubmission::new("Ana", "ana@x.com", "Hi"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_fault() {
        let result = ValidatedJson::<ContactSubmission>::from_request(request("{nope"), &()).await;

        let err = result.err().unwrap();
        assert_eq!(err.code(), crate::web::error::ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn test_array_body_is_fault() {
        let req = request(r#"["Ana","ana@x.com","Hi"]"#);

        let err = ValidatedJson::<ContactSubmission>::from_request(req, &())
            .await
            .err()
            .unwrap();

        assert_eq!(err.code(), crate::web::error::ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn test_invalid_value_is_bad_request() {
        let req = request(r#"{"name":"Ana","email":"ana","message":"Hi"}"#);

        let err = ValidatedJson::<ContactSubmission>::from_request(req, &())
            .await
            .err()
            .unwrap();

        assert_eq!(err.code(), crate::web::error::ErrorCode::BadRequest);
        assert_eq!(err.message(), "Invalid email address");
    }
}
