// Solace - HTTP server module
// Stateless chat classification over HTTP

mod handlers;

pub use handlers::{create_router, health_check, metrics_endpoint, ApiError, HealthStatus};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::metrics::ClassificationMetrics;
use crate::responder::Responder;

/// Main chat server structure
pub struct ChatServer {
    /// Classification pipeline (immutable tables, shared)
    responder: Responder,
    /// Per-bucket counters
    metrics: ClassificationMetrics,
    /// Server configuration
    config: ServerConfig,
    started_at: DateTime<Utc>,
    started: Instant,
}

impl ChatServer {
    /// Create a new chat server
    pub fn new(config: ServerConfig, responder: Responder) -> Result<Self> {
        Ok(Self {
            responder,
            metrics: ClassificationMetrics::new()?,
            config,
            started_at: Utc::now(),
            started: Instant::now(),
        })
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let bind_address = self.config.bind_address();
        let addr: SocketAddr = tokio::net::lookup_host(&bind_address)
            .await
            .with_context(|| format!("Invalid bind address: {}", bind_address))?
            .next()
            .with_context(|| format!("Bind address did not resolve: {}", bind_address))?;

        let app = create_router(Arc::new(self)).layer(TraceLayer::new_for_http());

        tracing::info!("Starting Solace chat server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    pub fn metrics(&self) -> &ClassificationMetrics {
        &self.metrics
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
