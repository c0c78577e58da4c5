//! Health check endpoint

use crate::CinegraphServer;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Upper bound on the store probe
const STORE_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Timestamp of the health check
    pub timestamp: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Version information
    pub version: String,
    /// Entity store status
    pub store: ComponentStatus,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// All systems healthy
    Healthy,
    /// System unhealthy
    Unhealthy,
}

/// Individual component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    /// Component status
    pub status: HealthStatus,
    /// Store backend name
    pub backend: &'static str,
    /// Response time in milliseconds
    pub response_time_ms: Option<f64>,
    /// Error message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Get health status
///
/// Answers 503 when the store probe fails or times out.
pub async fn health_check(
    State(server): State<Arc<CinegraphServer>>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = check_store(&server).await;
    let status = store.status;

    let response = HealthResponse {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: server.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
    };

    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(response))
}

async fn check_store(server: &CinegraphServer) -> ComponentStatus {
    let backend = server.catalog.backend();
    let start = Instant::now();

    match timeout(STORE_PROBE_TIMEOUT, server.catalog.ping()).await {
        Ok(Ok(())) => ComponentStatus {
            status: HealthStatus::Healthy,
            backend,
            response_time_ms: Some(start.elapsed().as_secs_f64() * 1000.0),
            error: None,
        },
        Ok(Err(e)) => {
            tracing::warn!("Store health probe failed: {}", e);
            ComponentStatus {
                status: HealthStatus::Unhealthy,
                backend,
                response_time_ms: Some(start.elapsed().as_secs_f64() * 1000.0),
                error: Some(e.to_string()),
            }
        }
        Err(_) => ComponentStatus {
            status: HealthStatus::Unhealthy,
            backend,
            response_time_ms: None,
            error: Some("store probe timed out".to_string()),
        },
    }
}
