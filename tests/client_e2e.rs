//! Contact Form E2E Tests
//!
//! Drives the form state machine over real HTTP against a running server.

use std::sync::Arc;
use std::time::Duration;

use excelsior::client::{ContactForm, Field, HttpTransport, StatusKind, TRANSPORT_ERROR};
use excelsior::contact::MemorySink;
use excelsior::web::WebServer;
use excelsior::Config;

/// Start a server on a random port and return its base URL.
async fn start_server() -> (String, Arc<MemorySink>) {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;

    let sink = Arc::new(MemorySink::new());
    let server = WebServer::new(&config)
        .expect("Failed to create web server")
        .with_sink(sink.clone());
    let addr = server.run_with_addr().await.expect("Failed to start server");

    (format!("http://{}", addr), sink)
}

fn fill(form: &mut ContactForm, name: &str, email: &str, message: &str) {
    form.set_field(Field::Name, name);
    form.set_field(Field::Email, email);
    form.set_field(Field::Message, message);
}

#[tokio::test]
async fn test_form_submit_success_clears_fields() {
    let (base_url, sink) = start_server().await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "Ana", "ana@example.com", "Hello");
    form.submit(&transport).await;

    assert!(!form.is_submitting());
    assert_eq!(form.status().kind, StatusKind::Success);
    assert_eq!(
        form.status().message,
        "Thank you for your message! We will get back to you soon."
    );
    assert_eq!(form.field(Field::Name), "");
    assert_eq!(form.field(Field::Email), "");
    assert_eq!(form.field(Field::Message), "");
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn test_form_submit_rejected_keeps_fields() {
    let (base_url, sink) = start_server().await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "Bo", "not-an-email", "Hi");
    form.submit(&transport).await;

    assert_eq!(form.status().kind, StatusKind::Error);
    assert_eq!(form.status().message, "Invalid email address");
    assert_eq!(form.field(Field::Email), "not-an-email");
    assert!(sink.is_empty());

    // Editing a field hides the banner.
    form.set_field(Field::Email, "bo@example.com");
    assert!(!form.status().is_visible());
}

#[tokio::test]
async fn test_form_submit_empty_form() {
    let (base_url, _sink) = start_server().await;
    let transport = HttpTransport::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut form = ContactForm::new();
    form.submit(&transport).await;

    assert_eq!(form.status().kind, StatusKind::Error);
    assert_eq!(form.status().message, "All fields are required");
}

#[tokio::test]
async fn test_form_submit_transport_failure() {
    // Bind and drop a listener to get a port nothing is serving.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();

    let mut form = ContactForm::new();
    fill(&mut form, "Ana", "ana@example.com", "Hello");
    form.submit(&transport).await;

    assert!(!form.is_submitting());
    assert_eq!(form.status().kind, StatusKind::Error);
    assert_eq!(form.status().message, TRANSPORT_ERROR);
    assert_eq!(form.field(Field::Name), "Ana");
}
