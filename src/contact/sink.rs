//! Destinations for accepted submissions.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

use super::SubmissionRecord;

/// Sink delivery failure.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink could not take the record.
    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
}

/// Receiver of accepted submissions.
///
/// The endpoint calls [`SubmissionSink::deliver`] once per accepted
/// submission. An email provider would plug in here as another implementation.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one record.
    async fn deliver(&self, record: &SubmissionRecord) -> Result<(), SinkError>;
}

/// Emits each submission as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        tracing::info!(
            target: "excelsior::contact",
            submission_id = %record.id,
            name = %record.submission.name,
            email = %record.submission.email,
            body = %record.submission.message,
            timestamp = %record.timestamp(),
            "New contact form submission"
        );
        Ok(())
    }
}

/// Keeps submissions in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far.
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of records received.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no record has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactSubmission;
    use chrono::{TimeZone, Utc};
    use std::io;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let first = SubmissionRecord::new(ContactSubmission::new("Ana", "ana@x.com", "one"));
        let second = SubmissionRecord::new(ContactSubmission::new("Bo", "bo@x.com", "two"));
        sink.deliver(&first).await.unwrap();
        sink.deliver(&second).await.unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].submission.message, "one");
        assert_eq!(records[1].submission.message, "two");
    }

    /// Formatted log output shared with the subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[tokio::test]
    async fn test_tracing_sink_logs_one_event_per_record() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        // Current-thread runtime: the default stays in force across awaits.
        let _guard = tracing::subscriber::set_default(subscriber);

        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
        let first = SubmissionRecord::at(ContactSubmission::new("Ana", "ana@x.com", "Hi"), at);
        let second = SubmissionRecord::at(ContactSubmission::new("Bo", "bo@x.com", "Yo"), at);
        TracingSink.deliver(&first).await.unwrap();
        TracingSink.deliver(&second).await.unwrap();

        let events: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|line| line.contains("New contact form submission"))
            .collect();
        assert_eq!(events.len(), 2);

        let event = &events[0];
        assert!(event.contains("INFO"), "{event}");
        assert!(event.contains("excelsior::contact"), "{event}");
        assert!(event.contains(&format!("submission_id={}", first.id)), "{event}");
        assert!(event.contains("name=Ana"), "{event}");
        assert!(event.contains("email=ana@x.com"), "{event}");
        assert!(event.contains("body=Hi"), "{event}");
        assert!(
            event.contains("timestamp=2026-10-19T08:15:30.000Z"),
            "{event}"
        );
        assert!(events[1].contains("name=Bo"));
    }

    #[test]
    fn test_sink_error_display() {
        let err = SinkError::Unavailable("smtp down".to_string());
        assert_eq!(err.to_string(), "submission sink unavailable: smtp down");
    }
}
