//! Heartbeat endpoint handler.
//!
//! Returns server status information: instance id, version, and uptime.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Crate version
    pub version: &'static str,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Location tag reported in metrics responses
    pub location: String,
    /// Server status
    pub status: &'static str,
}

impl HeartbeatResponse {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            server_id: state.server_id.clone(),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            uptime_seconds: state.uptime().as_secs(),
            location: state.location().to_string(),
            status: "healthy",
        }
    }
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    Json(HeartbeatResponse::from_state(&state))
}
