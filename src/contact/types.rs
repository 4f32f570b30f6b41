//! Contact submission payload.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One contact form payload.
///
/// Absent and `null` fields decode to the empty string, so they are reported
/// as missing by validation rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    /// Sender name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Sender email address.
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    /// Message body.
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,
}

impl ContactSubmission {
    /// Create a submission from its three fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
