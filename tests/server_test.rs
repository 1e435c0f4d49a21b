// Integration tests for HTTP server

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use solace::{
    buckets::KeywordScorer,
    config::ServerConfig,
    content::{ContentBank, NO_BUCKET_FALLBACK},
    crisis::{CrisisDetector, CrisisPhraseList},
    responder::{Knowledge, Responder},
    server::{create_router, ChatServer},
};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_server(keywords: KeywordScorer) -> Arc<ChatServer> {
    let knowledge = Knowledge::new(
        CrisisDetector::new(CrisisPhraseList::new(["kill myself", "suicide"])),
        keywords,
        ContentBank::new([
            ("Crisis", vec!["Please call emergency services or a crisis line."]),
            ("Anxiety/Stress", vec!["Let's breathe together.", "Try grounding."]),
        ]),
    );

    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    Arc::new(ChatServer::new(server_config, Responder::new(knowledge)).unwrap())
}

async fn post_chat(server: Arc<ChatServer>, body: &str) -> (StatusCode, Value) {
    post_chat_as(server, Some("application/json"), body).await
}

async fn post_chat_as(
    server: Arc<ChatServer>,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/chat");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = create_router(server).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_crisis_message() {
    let server = create_test_server(KeywordScorer::empty());
    let (status, json) = post_chat(
        server,
        r#"{"session_id": "s-1", "message": "I want to kill myself"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bucket"], "Crisis");
    assert_eq!(json["response"], "Please call emergency services or a crisis line.");
    assert_eq!(json["matched"], "kill myself");
    assert!(json.get("scores").is_none());
}

#[tokio::test]
async fn test_unmatched_message_with_empty_keywords() {
    let server = create_test_server(KeywordScorer::empty());
    let (status, json) = post_chat(server, r#"{"message": "I feel anxious today"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bucket"], "None");
    assert_eq!(json["response"], NO_BUCKET_FALLBACK);
    assert_eq!(json["scores"], serde_json::json!({}));
    assert!(json.get("matched").is_none());
}

#[tokio::test]
async fn test_keyword_classification() {
    let server = create_test_server(KeywordScorer::new([
        ("Anxiety/Stress", vec!["anxious", "panic"]),
        ("Sadness/Depression", vec!["sad"]),
    ]));
    let (status, json) = post_chat(server, r#"{"message": "So anxious, panic again"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bucket"], "Anxiety/Stress");
    let response = json["response"].as_str().unwrap();
    assert!(response == "Let's breathe together." || response == "Try grounding.");
    assert_eq!(json["scores"]["Anxiety/Stress"], 2);
    assert_eq!(json["scores"]["Sadness/Depression"], 0);
}

#[tokio::test]
async fn test_empty_message_is_legal() {
    let server = create_test_server(KeywordScorer::empty());
    let (status, json) = post_chat(server, r#"{"message": ""}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bucket"], "None");
}

#[tokio::test]
async fn test_missing_message_is_client_error() {
    let server = create_test_server(KeywordScorer::empty());
    let (status, json) = post_chat(server, r#"{"session_id": "s-1"}"#).await;

    assert!(status.is_client_error(), "status was {}", status);
    assert_eq!(json["error"]["type"], "invalid_request_error");
    assert!(json["error"]["message"].as_str().unwrap().contains("message"));
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let server = create_test_server(KeywordScorer::empty());
    let (status, json) = post_chat(server, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_wrong_content_type_is_client_error() {
    let body = r#"{"message": "I feel anxious today"}"#;

    for content_type in [Some("text/plain"), None] {
        let server = create_test_server(KeywordScorer::empty());
        let (status, json) = post_chat_as(server, content_type, body).await;

        assert_eq!(
            status,
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "content type {:?}",
            content_type
        );
        assert_eq!(json["error"]["type"], "invalid_request_error");
    }
}

#[tokio::test]
async fn test_health_reports_tables() {
    let server = create_test_server(KeywordScorer::new([("Anxiety/Stress", vec!["panic"])]));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = create_router(server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["crisis_phrases"], 2);
    assert_eq!(json["keyword_buckets"], 1);
    assert_eq!(json["content_buckets"], 2);
}

#[tokio::test]
async fn test_metrics_count_classifications() {
    let server = create_test_server(KeywordScorer::empty());

    post_chat(Arc::clone(&server), r#"{"message": "suicide"}"#).await;
    post_chat(Arc::clone(&server), r#"{"message": "hello"}"#).await;
    post_chat(Arc::clone(&server), r#"{"message": "hello again"}"#).await;

    assert_eq!(server.metrics().classified("Crisis"), 1);
    assert_eq!(server.metrics().classified("None"), 2);

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = create_router(server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("solace_crisis_detections_total 1"));
}
