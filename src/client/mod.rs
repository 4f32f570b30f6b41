//! Contact form client.
//!
//! [`ContactForm`] holds the visitor-facing form state and drives one
//! submission through a [`ContactTransport`]. [`HttpTransport`] talks to the
//! `/api/contact` endpoint over HTTP.

mod form;
mod transport;

pub use form::{ContactForm, Field, FormStatus, StatusKind, FALLBACK_ERROR, TRANSPORT_ERROR};
pub use transport::{ContactReply, ContactTransport, HttpTransport, ReplyBody, TransportError};
