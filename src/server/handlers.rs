// HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::ChatServer;
use crate::responder::{ChatRequest, ChatResponse};

/// Create the main application router
pub fn create_router(server: Arc<ChatServer>) -> Router {
    Router::new()
        .route("/chat", post(handle_chat))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .with_state(server)
}

/// Handle POST /chat - classify one message
async fn handle_chat(
    State(server): State<Arc<ChatServer>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let request_id = uuid::Uuid::new_v4();

    let response = server.responder().respond(&request);
    server.metrics().record(&response);

    tracing::info!(
        request_id = %request_id,
        session_id = request.session_id.as_deref().unwrap_or("-"),
        bucket = %response.bucket,
        matched = response.matched.as_deref().unwrap_or("-"),
        "Chat message classified"
    );

    Ok(Json(response))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub crisis_phrases: usize,
    pub keyword_buckets: usize,
    pub content_buckets: usize,
}

/// Handle GET /health - Health check endpoint
pub async fn health_check(State(server): State<Arc<ChatServer>>) -> Json<HealthStatus> {
    let knowledge = server.responder().knowledge();

    Json(HealthStatus {
        status: "healthy".to_string(),
        started_at: server.started_at().to_rfc3339(),
        uptime_seconds: server.uptime_seconds(),
        crisis_phrases: knowledge.crisis.phrases().len(),
        keyword_buckets: knowledge.keywords.bucket_count(),
        content_buckets: knowledge.content.len(),
    })
}

/// Handle GET /metrics - Prometheus metrics endpoint
pub async fn metrics_endpoint(
    State(server): State<Arc<ChatServer>>,
) -> Result<Response, ApiError> {
    let body = server.metrics().render()?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}

/// Application error wrapper for proper HTTP error responses
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body could not be read as a chat request
    #[error(transparent)]
    InvalidRequest(#[from] JsonRejection),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidRequest(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Rejected chat request");
                (rejection.status(), "invalid_request_error")
            }
            ApiError::Internal(error) => {
                tracing::error!(error = %error, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "api_error")
            }
        };

        let message = match &self {
            ApiError::InvalidRequest(rejection) => rejection.body_text(),
            ApiError::Internal(error) => error.to_string(),
        };

        let body = serde_json::json!({
            "error": {
                "message": message,
                "type": error_type
            }
        });

        (status, Json(body)).into_response()
    }
}
