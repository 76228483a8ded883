use std::time::Duration;

use learnify_core::fact::{EMPTY_FACT_MESSAGE, FACT_SYSTEM_INSTRUCTION, FAILED_FACT_MESSAGE};
use learnify_core::model::{Topic, TopicIcon};
use learnify_core::{FactOutcome, FactSession};
use serde_json::json;
use services::{FactError, FactService, FactServiceConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/models/gemini-test:generateContent";

fn topic() -> Topic {
    Topic::new(
        "Animal Kingdom",
        "Discover amazing animals and their homes.",
        TopicIcon::Animal,
        "bg-amber-100",
        "dark:bg-amber-900/50",
    )
    .unwrap()
}

fn service_for(server: &MockServer) -> FactService {
    let mut config = FactServiceConfig::new("test-key");
    config.base_url = server.uri();
    config.model = MODEL.into();
    config.timeout = Duration::from_secs(5);
    FactService::new(Some(config))
}

fn fact_body(text: &str) -> serde_json::Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

/// Drive a modal session through one generate cycle against `service`.
async fn run_generate(service: &FactService) -> FactSession {
    let mut session = FactSession::new();
    session.select(topic());
    let request = session.begin_generate().expect("generate allowed");
    let outcome = service.fetch_outcome(&request.topic).await;
    assert!(session.complete(request.ticket, outcome));
    session
}

#[tokio::test]
async fn success_sets_content_to_fact_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Tell me a fun fact about Animal Kingdom." }] }],
            "systemInstruction": { "parts": [{ "text": FACT_SYSTEM_INSTRUCTION }] },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fact_body("Octopuses have three hearts.")))
        .expect(1)
        .mount(&server)
        .await;

    let session = run_generate(&service_for(&server)).await;
    assert_eq!(session.content(), "Octopuses have three hearts.");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn empty_candidates_use_empty_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service.generate(&topic()).await.unwrap_err();
    assert!(matches!(err, FactError::EmptyResponse));

    let session = run_generate(&service).await;
    assert_eq!(session.content(), EMPTY_FACT_MESSAGE);
}

#[tokio::test]
async fn server_error_uses_failure_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let session = run_generate(&service).await;
    assert_eq!(session.content(), FAILED_FACT_MESSAGE);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn status_error_is_reported_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = service_for(&server).generate(&topic()).await.unwrap_err();
    assert!(matches!(err, FactError::HttpStatus(status) if status.as_u16() == 503));
}

#[tokio::test]
async fn malformed_body_uses_failure_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service.generate(&topic()).await.unwrap_err();
    assert!(matches!(err, FactError::InvalidBody(_)));
    assert_eq!(service.fetch_outcome(&topic()).await, FactOutcome::Failed);
}

#[tokio::test]
async fn differently_shaped_body_uses_empty_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "candidates": [{ "output": "hi" }] })),
        )
        .mount(&server)
        .await;

    let session = run_generate(&service_for(&server)).await;
    assert_eq!(session.content(), EMPTY_FACT_MESSAGE);
}

#[tokio::test]
async fn slow_response_times_out_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fact_body("too late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut config = FactServiceConfig::new("test-key");
    config.base_url = server.uri();
    config.model = MODEL.into();
    config.timeout = Duration::from_millis(50);
    let service = FactService::new(Some(config));

    let err = service.generate(&topic()).await.unwrap_err();
    assert!(matches!(err, FactError::Timeout), "unexpected error: {err:?}");
    assert_eq!(service.fetch_outcome(&topic()).await, FactOutcome::Failed);
}

#[tokio::test]
async fn unreachable_host_uses_failure_fallback() {
    let mut config = FactServiceConfig::new("test-key");
    config.base_url = "http://127.0.0.1:9".into();
    config.timeout = Duration::from_secs(2);
    let service = FactService::new(Some(config));

    let session = run_generate(&service).await;
    assert_eq!(session.content(), FAILED_FACT_MESSAGE);
}

#[tokio::test]
async fn transport_errors_do_not_carry_the_api_key() {
    let mut config = FactServiceConfig::new("SECRET-API-KEY");
    config.base_url = "http://127.0.0.1:9".into();
    config.timeout = Duration::from_secs(2);
    let service = FactService::new(Some(config));

    let err = service.generate(&topic()).await.unwrap_err();
    let logged = format!("{err} {err:?}");
    assert!(!logged.contains("SECRET-API-KEY"), "key leaked: {logged}");
}

#[tokio::test]
async fn api_key_is_not_sent_in_the_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server).generate(&topic()).await.unwrap_err();
    assert!(!format!("{err} {err:?}").contains("test-key"));

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn response_after_close_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(fact_body("Bees dance.")))
        .mount(&server)
        .await;
    let service = service_for(&server);

    let mut session = FactSession::new();
    session.select(topic());
    let request = session.begin_generate().unwrap();
    session.close();

    let outcome = service.fetch_outcome(&request.topic).await;
    assert_eq!(outcome, FactOutcome::Fact("Bees dance.".into()));
    assert!(!session.complete(request.ticket, outcome));
    assert!(!session.is_open());
    assert_eq!(session.content(), "");
}
