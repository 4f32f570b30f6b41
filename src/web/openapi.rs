//! OpenAPI document for the public API.

use axum::Json;
use utoipa::OpenApi;

use crate::contact::ContactSubmission;
use crate::web::dto::ContactResponse;
use crate::web::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(crate::web::handlers::contact::submit_contact),
    components(schemas(ContactSubmission, ContactResponse, ErrorBody)),
    tags((name = "Contact", description = "Contact form submissions"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
