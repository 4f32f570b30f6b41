//! Response DTOs for Web API.

use serde::Serialize;
use utoipa::ToSchema;

/// Reply text for an accepted contact submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Contact submission accepted.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    /// Always `true`.
    pub success: bool,
    /// Message to show the visitor.
    pub message: String,
}

impl ContactResponse {
    /// The reply for an accepted submission.
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: THANK_YOU_MESSAGE.to_string(),
        }
    }
}
