//! HTTP-level integration tests: the full router driven through tower's
//! `oneshot`, with the SMTP provider replaced by a mock.

#[allow(dead_code)]
mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trainapp_mail_service::config::{MailConfig, ServerConfig, Settings, SmtpConfig};
use trainapp_mail_service::server::{create_app, AppState};

use support::MockTransportProvider;

fn test_settings() -> Settings {
    Settings {
        server: ServerConfig::default(),
        smtp: SmtpConfig {
            user: Some("info@trainapp.org".to_string()),
            password: Some("secret".to_string()),
            ..SmtpConfig::default()
        },
        mail: MailConfig::default(),
    }
}

fn test_app(provider: Arc<MockTransportProvider>) -> Router {
    let state = AppState::with_provider(test_settings(), provider).unwrap();
    create_app(state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn submit_form_happy_path() {
    let provider = MockTransportProvider::healthy();
    let app = test_app(provider.clone());

    let (status, body) = post_json(
        app,
        "/submit-form",
        json!({"name": "Ana", "email": "ana@x.com", "role": "teacher"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Form submission received and processed successfully"
    );

    let sent = provider.attempts();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].subject.contains("Ana"));
    assert_eq!(sent[1].to, "ana@x.com");
}

#[tokio::test]
async fn after_demo_form_missing_feedback_is_rejected() {
    let provider = MockTransportProvider::healthy();
    let app = test_app(provider.clone());

    let (status, body) = post_json(
        app,
        "/after-demo-form",
        json!({"name": "Ana", "email": "ana@x.com", "difficulty": 6}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: feedback");
    assert!(provider.attempts().is_empty());
}

#[tokio::test]
async fn send_email_success_message() {
    let provider = MockTransportProvider::healthy();
    let app = test_app(provider.clone());

    let (status, body) = post_json(
        app,
        "/send-email",
        json!({"recipient": "new-user@example.com", "name": "Ana"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Email sent successfully");
    assert_eq!(provider.attempts().len(), 1);
}

#[tokio::test]
async fn transport_failure_is_a_generic_500() {
    let provider = MockTransportProvider::failing_handshake();
    let app = test_app(provider);

    let (status, body) = post_json(
        app,
        "/send-email",
        json!({"recipient": "new-user@example.com", "name": "Ana"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error sending email");
}

#[tokio::test]
async fn confirmation_failure_is_reported_as_endpoint_failure() {
    let provider = MockTransportProvider::failing_sends_from(1);
    let app = test_app(provider.clone());

    let (status, body) = post_json(
        app,
        "/submit-form",
        json!({"name": "Ana", "email": "ana@x.com", "role": "teacher"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error processing form submission");
    // Primary went out before the confirmation failed.
    assert_eq!(provider.attempts().len(), 2);
}

#[tokio::test]
async fn unknown_request_fields_are_ignored() {
    let provider = MockTransportProvider::healthy();
    let app = test_app(provider);

    let (status, _) = post_json(
        app,
        "/submit-form",
        json!({
            "name": "Ana",
            "email": "ana@x.com",
            "role": "teacher",
            "newsletter": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_smtp_configuration() {
    let provider = MockTransportProvider::healthy();
    let app = test_app(provider);

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["smtp_configured"], true);
}

#[tokio::test]
async fn stats_reflect_dispatch_activity() {
    let provider = MockTransportProvider::healthy();
    let state = AppState::with_provider(test_settings(), provider).unwrap();
    let app = create_app(state);

    let (status, _) = post_json(
        app.clone(),
        "/submit-form",
        json!({"name": "Ana", "email": "ana@x.com", "role": "teacher"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dispatch"]["total_dispatched"], 1);
    assert_eq!(body["dispatch"]["primary_sent"], 1);
    assert_eq!(body["dispatch"]["confirmations_sent"], 1);
}
