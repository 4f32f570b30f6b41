//! Transport between the contact form and the endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::contact::ContactSubmission;

/// Transport failure: the request never produced a usable reply.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP client error (connect, timeout, undecodable body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other transport failure.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Decoded endpoint reply body.
///
/// Success replies carry `success` and `message`, failures carry `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReplyBody {
    /// Set on success.
    #[serde(default)]
    pub success: Option<bool>,
    /// Thank-you message on success.
    #[serde(default)]
    pub message: Option<String>,
    /// Error text on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// HTTP status plus decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body.
    pub body: ReplyBody,
}

impl ContactReply {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a submission to the endpoint.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Post one submission and decode the reply.
    async fn post_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactReply, TransportError>;
}

/// `reqwest`-backed transport for `POST {base_url}/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the site at `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    /// Full endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn post_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactReply, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status().as_u16();
        // A non-JSON body is a transport failure, whatever the status.
        let body = response.json::<ReplyBody>().await?;

        tracing::debug!(status, "Contact endpoint replied");
        Ok(ContactReply { status, body })
    }
}
