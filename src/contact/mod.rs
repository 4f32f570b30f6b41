//! Contact form submissions.
//!
//! A [`ContactSubmission`] is the payload posted by the contact form. It is
//! validated, wrapped into a [`SubmissionRecord`], handed to a
//! [`SubmissionSink`] exactly once and then dropped. Nothing is stored.

mod record;
mod sink;
mod types;
mod validation;

pub use record::SubmissionRecord;
pub use sink::{MemorySink, SinkError, SubmissionSink, TracingSink};
pub use types::ContactSubmission;
pub use validation::{is_valid_email, ContactError, EMAIL_PATTERN};
