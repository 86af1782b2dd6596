//! Health check and statistics endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::dispatch::DispatchStatsSnapshot;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Whether SMTP credentials are configured. Their absence only fails a
    /// dispatch, never startup.
    pub smtp_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub dispatch: DispatchStatsSnapshot,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let smtp = &state.settings.smtp;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        smtp_configured: smtp.user.is_some() && smtp.password.is_some(),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        dispatch: state.dispatcher.stats(),
    })
}
