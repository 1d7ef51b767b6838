//! Router-level tests driving the handlers through `tower::ServiceExt::oneshot`.
//!
//! Each test gets a fresh in-memory database and, where agents are involved, a
//! `wiremock` server whose mocks assert how often each agent was called.


use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::server::{config::FormAgentConfig, state::AppState};

const MARKER: &str = "Thank you for using AutoForms!";

/// Agent configuration pointing every agent at its own path on `server`.
fn agent_config(server: &MockServer) -> FormAgentConfig {
    FormAgentConfig {
        creation_url: Some(format!("{}/create", server.uri())),
        filling_url: Some(format!("{}/fill", server.uri())),
        editing_url: Some(format!("{}/edit", server.uri())),
        analysis_url: Some(format!("{}/analyze", server.uri())),
        api_key: None,
        completion_marker: MARKER.to_string(),
    }
}

/// Builds the router over a fresh database.
///
/// The returned context owns the database and must stay alive for the whole test.
async fn setup(config: FormAgentConfig) -> (TestContext, Router) {
    let test = TestBuilder::new().with_form_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let state = AppState::new(db, reqwest::Client::new(), config, 4);

    (test, crate::server::router::router(state))
}

/// Sends a JSON POST and decodes the JSON response body.
async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, body)
}

/// Mounts an agent mock on `route` replying with `reply`, expected `times` times.
async fn mount_agent(server: &MockServer, route: &str, reply: Value, times: u64) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts an agent mock that only matches the exact request body.
async fn mount_agent_expecting(
    server: &MockServer,
    route: &str,
    body: Value,
    reply: Value,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(path(route))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(times)
        .mount(server)
        .await;
}

/// A three-turn conversation whose second-to-last message is `summary`.
fn finished_conversation(summary: &str) -> Value {
    json!([
        { "role": "user", "content": "I need a form" },
        { "role": "assistant", "content": summary },
        { "role": "assistant", "content": MARKER }
    ])
}

async fn count_forms(db: &DatabaseConnection) -> usize {
    entity::prelude::Form::find().all(db).await.unwrap().len()
}

async fn count_submissions(db: &DatabaseConnection) -> usize {
    entity::prelude::Submission::find().all(db).await.unwrap().len()
}
