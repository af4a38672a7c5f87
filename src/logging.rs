//! Logging utilities for the apparent server.
//!
//! Structured `tracing` helpers shared by the binary and the request handlers.

use std::time::Instant;
use tracing::{debug, error, info, warn, Level};

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::error::ApparentError;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber; `RUST_LOG` wins over `log_level`
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();
}

/// Run `f`, logging its duration under `operation` and `request_id`
pub fn log_timed_operation<F, R>(operation: &str, request_id: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(
        operation = operation,
        request_id = request_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        request_id = request_id,
        duration_us = start.elapsed().as_micros() as u64,
        "Operation completed"
    );

    result
}

/// Log an error with context
pub fn log_error(error: &ApparentError, context: &str) {
    error!(error = %error, context = context, "Error occurred");
}

/// Log an error that occurred during request processing.
///
/// Client mistakes are warnings; anything else is logged as an error.
pub fn log_request_error(
    error: &ApparentError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    match error {
        ApparentError::Validation(validation) => warn!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params.unwrap_or("none"),
            failed_fields = validation.messages.len(),
            "Request validation failed"
        ),
        ApparentError::InvalidRequest { .. } => warn!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params.unwrap_or("none"),
            "Malformed request"
        ),
        _ => error!(
            error = %error,
            endpoint = endpoint,
            request_id = request_id,
            params = params.unwrap_or("none"),
            "Request processing error"
        ),
    }
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(&id1).is_ok());
    }

    #[test]
    fn test_log_timed_operation_returns_result() {
        let result = log_timed_operation("test_operation", "req-1", || 6 * 7);
        assert_eq!(result, 42);
    }
}
