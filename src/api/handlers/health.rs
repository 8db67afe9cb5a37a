//! Handlers for the health check and the service root.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    HealthChecks, HealthResponse, Probe, ProbeStatus, RootResponse, ServiceStatus,
};
use crate::state::AppState;

/// Reports whether the service can reach its database.
///
/// # Endpoint
///
/// `GET /health`
///
/// Answers 200 with `"status": "healthy"` when every probe passes, otherwise
/// 503 with `"status": "degraded"` and the failing probe's message:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "12 active links" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = probe_database(&state).await;

    let (code, status) = match database.status {
        ProbeStatus::Ok => (StatusCode::OK, ServiceStatus::Healthy),
        ProbeStatus::Error => (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded),
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }),
    )
}

/// Runs a read against the `links` table.
async fn probe_database(state: &AppState) -> Probe {
    match state.link_service.count_active().await {
        Ok(count) => Probe {
            status: ProbeStatus::Ok,
            message: Some(format!("{count} active links")),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database probe failed");
            Probe {
                status: ProbeStatus::Error,
                message: Some(e.to_string()),
            }
        }
    }
}

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "URL Shortener API is running",
        status: ServiceStatus::Healthy,
    })
}
