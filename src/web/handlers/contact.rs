//! Contact form endpoint.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::contact::{ContactError, ContactSubmission, SubmissionRecord};
use crate::web::dto::{ContactResponse, ValidatedJson};
use crate::web::error::ApiError;

/// POST /api/contact - Accept a contact form submission.
///
/// The submission is delivered to the configured sink once and then dropped.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Submission accepted", body = ContactResponse),
        (status = 400, description = "Missing field or invalid email address", body = crate::web::error::ErrorBody),
        (status = 500, description = "Unreadable body or delivery failure", body = crate::web::error::ErrorBody)
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(submission): ValidatedJson<ContactSubmission>,
) -> Result<Json<ContactResponse>, ApiError> {
    let record = SubmissionRecord::new(submission);

    state
        .sink
        .deliver(&record)
        .await
        .map_err(|e| ContactError::ServerFault(e.to_string()))?;

    tracing::debug!(submission_id = %record.id, "Contact submission accepted");

    Ok(Json(ContactResponse::accepted()))
}
