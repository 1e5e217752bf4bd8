//! Integration tests for the safety HTTP API
//!
//! Drives the router in-process; no listener is bound.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use safety_rs::{SafetyBand, SafetyConfig, SafetyServer};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> Router {
    SafetyServer::new(SafetyConfig::default())
        .unwrap()
        .router()
        .unwrap()
}

async fn post_raw(router: Router, body: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/check_email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn check_email(body: Value) -> (StatusCode, Value) {
    post_raw(router(), &body.to_string()).await
}

#[tokio::test]
async fn test_index_returns_welcome() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to the Email Safety Checker API");
}

#[tokio::test]
async fn test_health() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_check_email_response_shape() {
    let (status, body) = check_email(json!({"email_content": "free"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 2);
    assert_eq!(body["safety_score"], 45);
    assert_eq!(body["result_message"], SafetyBand::Warning.message());
}

#[tokio::test]
async fn test_check_email_lowercases_content() {
    let (status, body) = check_email(json!({"email_content": "FREE"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["safety_score"], 45);
}

#[tokio::test]
async fn test_shouting_is_not_penalised_after_lowercasing() {
    let (_, body) = check_email(json!({
        "email_content": "PLEASE READ THIS TODAY BEFORE THE MEETING"
    }))
    .await;

    assert_eq!(body["safety_score"], 80);
}

#[tokio::test]
async fn test_check_email_verified_sender() {
    let (_, body) = check_email(json!({
        "email_content": "Hello from Support@Microsoft.com"
    }))
    .await;

    assert_eq!(body["safety_score"], 100);
    assert_eq!(body["result_message"], SafetyBand::AppearsSafe.message());
}

#[tokio::test]
async fn test_missing_content_scores_as_empty() {
    let (status, body) = check_email(json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["safety_score"], 80);
    assert_eq!(body["result_message"], SafetyBand::AppearsSafe.message());
}

#[tokio::test]
async fn test_non_string_content_scores_as_empty() {
    let (status, body) = check_email(json!({"email_content": 1234})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["safety_score"], 80);
}

#[tokio::test]
async fn test_phishing_email() {
    let (status, body) = check_email(json!({
        "email_content": "URGENT: your account suspended. Click here http://secure-bank.example and confirm your password"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["safety_score"], 0);
    assert_eq!(body["result_message"], SafetyBand::CriticalDanger.message());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) = post_raw(router(), "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid request"));
}

#[tokio::test]
async fn test_cors_headers_present_by_default() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://mail.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_can_be_disabled() {
    let mut config = SafetyConfig::default();
    config.cors.enabled = false;
    let router = SafetyServer::new(config).unwrap().router().unwrap();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://mail.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_large_body_is_scored() {
    let content = "a".repeat(3 * 1024 * 1024);
    let (status, body) = check_email(json!({ "email_content": content })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["safety_score"], 80);
    assert_eq!(body["result_message"], SafetyBand::AppearsSafe.message());
}
