//! End-to-end publisher tests against a scripted HTTP server

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nodus_prompt_sync::domain::{DomainError, PromptSeed};
use nodus_prompt_sync::infrastructure::langfuse::{HttpClient, LangfuseClient};
use nodus_prompt_sync::infrastructure::services::PromptPublisher;
use nodus_prompt_sync::prompts;

const PUBLIC_KEY: &str = "pk-test";
const SECRET_KEY: &str = "sk-test";

// base64("pk-test:sk-test")
const BASIC_AUTH: &str = "Basic cGstdGVzdDpzay10ZXN0";

fn publisher_for(host: &str, seeds: Vec<PromptSeed>) -> PromptPublisher<HttpClient> {
    let client = LangfuseClient::new(HttpClient::new(), host, PUBLIC_KEY, SECRET_KEY);
    PromptPublisher::new(client, seeds)
}

fn stored_record(seed: &PromptSeed, version: u32) -> serde_json::Value {
    json!({
        "id": "cm-test-id",
        "name": seed.name().as_str(),
        "version": version,
        "type": "text",
        "prompt": seed.body(),
        "labels": seed.labels(),
        "tags": [],
        "config": seed.config(),
        "createdAt": "2025-01-15T10:00:00.000Z",
        "updatedAt": "2025-01-15T10:00:00.000Z"
    })
}

#[tokio::test]
async fn sync_publishes_and_verifies_the_seed_catalog() {
    let server = MockServer::start().await;
    let seeds = prompts::seeds();
    let seed = &seeds[0];

    Mock::given(method("POST"))
        .and(path("/api/public/v2/prompts"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_record(seed, 1)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/public/v2/prompts/{}", seed.name())))
        .and(query_param("label", "production"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_record(seed, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let publisher = publisher_for(&server.uri(), seeds.clone());
    publisher.run().await.unwrap();
}

#[tokio::test]
async fn republishing_the_same_catalog_is_idempotent() {
    let server = MockServer::start().await;
    let seeds = prompts::seeds();
    let seed = &seeds[0];

    // The store assigns a fresh version on each write instead of rejecting.
    Mock::given(method("POST"))
        .and(path("/api/public/v2/prompts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_record(seed, 2)))
        .expect(2)
        .mount(&server)
        .await;

    let publisher = publisher_for(&server.uri(), seeds.clone());
    publisher.publish().await.unwrap();
    publisher.publish().await.unwrap();
}

#[tokio::test]
async fn rejecting_service_surfaces_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/public/v2/prompts"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let publisher = publisher_for(&server.uri(), prompts::seeds());
    let error = publisher.run().await.unwrap_err();

    assert_eq!(error.status(), Some(401));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Nothing listens on this port.
    let publisher = publisher_for("http://127.0.0.1:9", prompts::seeds());
    let error = publisher.run().await.unwrap_err();

    assert!(matches!(error, DomainError::Transport { .. }));
}

#[tokio::test]
async fn verify_fails_when_store_returns_a_different_body() {
    let server = MockServer::start().await;
    let seeds = prompts::seeds();
    let seed = &seeds[0];

    let mut record = stored_record(seed, 1);
    record["prompt"] = json!("An older revision of the instruction.");

    Mock::given(method("GET"))
        .and(path(format!("/api/public/v2/prompts/{}", seed.name())))
        .and(query_param("label", "production"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(&server)
        .await;

    let publisher = publisher_for(&server.uri(), seeds.clone());
    let error = publisher.verify().await.unwrap_err();

    assert!(matches!(error, DomainError::Verification { .. }));
}
