//! Integration tests for the studio HTTP endpoints.
//!
//! These drive the full axum router in-process:
//! 1. Task requests are parsed and dispatched by `type`
//! 2. Offline and model-backed gateways both answer with `{ "result": ... }`
//! 3. Bad requests get a 400 with `{ "error": ... }`

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use story_studio::adapters::ai::MockAIProvider;
use story_studio::adapters::http::{app_router, StudioAppState};
use story_studio::application::handlers::studio::StudioGateway;
use story_studio::config::ServerConfig;
use story_studio::domain::studio::{
    document_summary, generate_pip_suggestions, generate_soundbite_options,
    generate_story_advice, suggest_behaviour_changes, SOUNDBITE_ADVICE, STATISTIC_MORE_PROMPT,
};
use story_studio::ports::AIError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const SORGHUM_DOC: &str = "Smallholder farmers in Zimbabwe spend hours threshing sorghum by hand. \
    Our solar-powered thresher reduces that labour dramatically and women farmers report \
    more time for income generating work.";

fn offline_app() -> Router {
    app_router(
        StudioAppState::new(StudioGateway::offline()),
        &ServerConfig::default(),
    )
}

fn model_app(mock: MockAIProvider) -> Router {
    app_router(
        StudioAppState::new(StudioGateway::new(Arc::new(mock))),
        &ServerConfig::default(),
    )
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}

async fn post_raw(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/ai")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// =============================================================================
// Offline gateway
// =============================================================================

#[tokio::test]
async fn summary_without_credentials_matches_generator() {
    let (status, body) =
        post_json(offline_app(), json!({"type": "summariseDocument", "documents": SORGHUM_DOC}))
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(document_summary(SORGHUM_DOC)));
}

#[tokio::test]
async fn behaviour_changes_return_five_suggestions() {
    let (status, body) = post_json(
        offline_app(),
        json!({"type": "suggestBehaviourChanges", "documents": SORGHUM_DOC}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(suggest_behaviour_changes(SORGHUM_DOC)));
    assert_eq!(body["result"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn pip_suggestions_have_three_options_per_role() {
    let (status, body) = post_json(
        offline_app(),
        json!({
            "type": "generatePIPSuggestions",
            "documents": SORGHUM_DOC,
            "shouldStatement": "No farmer should lose a harvest to a broken process."
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let expected = generate_pip_suggestions(
        SORGHUM_DOC,
        "No farmer should lose a harvest to a broken process.",
    );
    assert_eq!(body["result"], serde_json::to_value(expected).unwrap());
    for role in ["problem", "inspiration", "payoff"] {
        assert_eq!(body["result"][role].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn soundbite_options_wrap_message_index() {
    let (_, body) = post_json(
        offline_app(),
        json!({"type": "generateSoundbiteOptions", "message": "anything", "messageIndex": 4}),
    )
    .await;

    assert_eq!(body["result"], json!(generate_soundbite_options("", 1)));
}

#[tokio::test]
async fn missing_params_are_treated_as_empty() {
    let (status, body) =
        post_json(offline_app(), json!({"type": "generateStatisticAdvice"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(STATISTIC_MORE_PROMPT));
}

// =============================================================================
// Error responses
// =============================================================================

#[tokio::test]
async fn unknown_type_is_rejected() {
    let (status, body) = post_json(offline_app(), json!({"type": "doSomething"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Unknown type"}));
}

#[tokio::test]
async fn missing_type_is_rejected() {
    let (status, body) = post_json(offline_app(), json!({"documents": SORGHUM_DOC})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Unknown type"}));
}

#[tokio::test]
async fn unknown_type_never_reaches_the_model() {
    let mock = MockAIProvider::new();
    let (status, _) = post_json(model_app(mock.clone()), json!({"type": "doSomething"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn invalid_json_is_a_bad_request() {
    let (status, body) = post_raw(offline_app(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// Model-backed gateway
// =============================================================================

#[tokio::test]
async fn model_reply_is_returned_when_well_formed() {
    let mock = MockAIProvider::new()
        .with_response(r#"{"statements": ["No farmer should thresh by hand."]}"#);

    let (status, body) = post_json(
        model_app(mock.clone()),
        json!({
            "type": "generateShouldStatements",
            "documents": SORGHUM_DOC,
            "behaviourChange": "Fund solar threshers"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(["No farmer should thresh by hand."]));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn model_failure_serves_generator_output() {
    let mock = MockAIProvider::new().with_error(AIError::AuthenticationFailed);

    let (status, body) = post_json(
        model_app(mock),
        json!({"type": "summariseDocument", "documents": SORGHUM_DOC}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(document_summary(SORGHUM_DOC)));
}

#[tokio::test]
async fn malformed_model_reply_serves_generator_output() {
    let mock = MockAIProvider::new().with_response("I think your soundbites are great!");

    let (status, body) = post_json(
        model_app(mock),
        json!({"type": "generateSoundbiteOptions", "message": "", "messageIndex": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(generate_soundbite_options("", 2)));
}

#[tokio::test]
async fn stalled_model_serves_fallback_before_request_timeout() {
    let mock = MockAIProvider::new()
        .with_response(r#"{"advice": "Too late to matter."}"#)
        .with_delay(Duration::from_secs(2));
    let gateway =
        StudioGateway::new(Arc::new(mock)).with_model_timeout(Duration::from_millis(300));
    let server = ServerConfig {
        request_timeout_secs: 1,
        ..Default::default()
    };
    let app = app_router(StudioAppState::new(gateway), &server);

    let (status, body) = post_json(app, json!({"type": "generateSoundbiteAdvice"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(SOUNDBITE_ADVICE));
}

#[tokio::test]
async fn largest_message_index_is_served() {
    let (status, body) = post_json(
        offline_app(),
        json!({
            "type": "generateStoryAdvice",
            "story": "Grace walked four hours to the mill every market day.",
            "messageIndex": u64::MAX,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        json!(generate_story_advice(
            "Grace walked four hours to the mill every market day.",
            usize::MAX
        ))
    );
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_model_configuration() {
    for (app, expected) in [
        (offline_app(), false),
        (model_app(MockAIProvider::new()), true),
    ] {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "ok", "model": expected}));
    }
}
