//! Accepted submission records.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::ContactSubmission;

/// A validated submission as handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    /// Per-record identifier, for correlating log lines.
    pub id: Uuid,
    /// The submitted fields.
    pub submission: ContactSubmission,
    /// When the endpoint accepted the submission.
    pub received_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Stamp a submission with a fresh id and the current time.
    pub fn new(submission: ContactSubmission) -> Self {
        Self::at(submission, Utc::now())
    }

    /// Stamp a submission with a fresh id and the given time.
    pub fn at(submission: ContactSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission,
            received_at,
        }
    }

    /// ISO-8601 timestamp in UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`.
    pub fn timestamp(&self) -> String {
        self.received_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
