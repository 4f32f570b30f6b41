//! Contact form state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::transport::{ContactReply, ContactTransport, TransportError};
use crate::contact::ContactSubmission;

/// Shown when an error reply carries no error text.
pub const FALLBACK_ERROR: &str = "Something went wrong";

/// Shown when the request itself fails.
pub const TRANSPORT_ERROR: &str = "Failed to send message. Please try again.";

/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Input `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(format!("unknown form field: {other}")),
        }
    }
}

/// Kind of status banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// No banner.
    #[default]
    #[serde(rename = "")]
    None,
    Success,
    Error,
}

/// Status banner shown above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Whether a banner should be rendered.
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

/// In-memory contact form.
///
/// The in-progress flag only marks the form busy; it does not stop a second
/// submission from starting.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    submitting: bool,
    status: FormStatus,
}

impl ContactForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Message => &self.fields.message,
        }
    }

    /// All field values.
    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current status banner.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Update a field. Any previous status is cleared.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
        self.status = FormStatus::default();
    }

    /// Mark the form busy and return the payload to send.
    pub fn begin_submit(&mut self) -> ContactSubmission {
        self.submitting = true;
        self.status = FormStatus::default();
        self.fields.clone()
    }

    /// Apply the outcome of a submission and clear the busy flag.
    pub fn finish(&mut self, outcome: Result<ContactReply, TransportError>) {
        match outcome {
            Ok(reply) if reply.is_success() => {
                self.status = FormStatus::success(reply.body.message.unwrap_or_default());
                self.fields = ContactSubmission::default();
            }
            Ok(reply) => {
                let message = reply
                    .body
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string());
                self.status = FormStatus::error(message);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                self.status = FormStatus::error(TRANSPORT_ERROR);
            }
        }
        self.submitting = false;
    }

    /// Send the current fields through `transport` and apply the result.
    pub async fn submit<T>(&mut self, transport: &T)
    where
        T: ContactTransport + ?Sized,
    {
        let payload = self.begin_submit();
        let outcome = transport.post_contact(&payload).await;
        self.finish(outcome);
    }
}
