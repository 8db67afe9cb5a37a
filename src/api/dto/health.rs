//! DTOs for health check and root endpoints.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single component probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Probes run by the health check.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: Probe,
}

#[derive(Debug, Serialize)]
pub struct Probe {
    pub status: ProbeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Banner returned at `/`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: ServiceStatus,
}
