use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pool::SurrealPool;

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: CheckResult,
}

/// Result of an individual check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Readiness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// State for the health check routes
#[derive(Clone)]
pub struct HealthState {
    pub db_pool: Arc<SurrealPool>,
    pub start_time: std::time::Instant,
}

/// Build the health check routes, mounted alongside the entry service.
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check)) // Kubernetes convention
        .route("/livez", get(liveness_check)) // Kubernetes liveness probe
        .route("/readyz", get(readiness_check)) // Kubernetes readiness probe
        .with_state(state)
}

/// Main health check endpoint
async fn health_check(State(state): State<HealthState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    let database = match state.db_pool.get().await {
        Ok(conn) => match conn.db.query("RETURN 1").await {
            Ok(_) => CheckResult {
                status: HealthStatus::Healthy,
                message: None,
            },
            Err(e) => CheckResult {
                status: HealthStatus::Unhealthy,
                message: Some(format!("Database query failed: {}", e)),
            },
        },
        Err(e) => CheckResult {
            status: HealthStatus::Unhealthy,
            message: Some(format!("Failed to get database connection: {}", e)),
        },
    };

    let overall_status = if matches!(database.status, HealthStatus::Unhealthy) {
        HealthStatus::Unhealthy
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status: overall_status.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        database,
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Kubernetes liveness probe - just checks if the process is alive
async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}

/// Kubernetes readiness probe - checks if the service can reach its store
async fn readiness_check(State(state): State<HealthState>) -> impl IntoResponse {
    let ready = state.db_pool.get().await.is_ok();

    let response = ReadinessResponse {
        ready,
        message: if ready {
            None
        } else {
            Some("Not ready - database connection unavailable".to_string())
        },
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
