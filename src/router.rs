//! Route table for the apparent server.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{heartbeat_handler, metrics_body_handler, metrics_query_handler};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/weather-metrics",
            get(metrics_query_handler).post(metrics_body_handler),
        )
        .route("/heartbeat", get(heartbeat_handler))
        .layer(
            ServiceBuilder::new()
                .layer(create_http_trace_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
