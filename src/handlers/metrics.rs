//! Weather metrics endpoint handler.
//!
//! Accepts temperature, humidity, wind speed and an optional wind direction,
//! either as query parameters or in the request body (JSON or form-encoded),
//! and returns the derived indices and forecast.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, FromRequest, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;

use crate::error::{ApparentError, Result};
use crate::logging::{generate_request_id, log_request_error, log_timed_operation};
use crate::metrics::{evaluate, RawMetricsInput};
use crate::state::AppState;

const ENDPOINT: &str = "/api/weather-metrics";

/// Handle GET /api/weather-metrics requests
pub async fn metrics_query_handler(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<RawMetricsInput>, QueryRejection>,
) -> Response {
    let request_id = generate_request_id();

    match query {
        Ok(Query(raw)) => respond(&state, raw, &request_id),
        Err(rejection) => error_response(invalid_request(rejection.body_text()), None, &request_id),
    }
}

/// Handle POST /api/weather-metrics requests
///
/// The body is decoded according to its `Content-Type`; body fields take
/// precedence and query parameters fill in anything the body omits. A
/// request without a body is evaluated from the query string alone.
pub async fn metrics_body_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Response {
    let request_id = generate_request_id();

    match read_body_input(&state, request).await {
        Ok(raw) => respond(&state, raw, &request_id),
        Err(error) => error_response(error, None, &request_id),
    }
}

async fn read_body_input(state: &Arc<AppState>, request: Request) -> Result<RawMetricsInput> {
    let Query(query) = Query::<RawMetricsInput>::try_from_uri(request.uri())
        .map_err(|rejection| invalid_request(rejection.body_text()))?;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase());

    let body = match content_type.as_deref() {
        Some(mime) if mime == "application/json" || mime.ends_with("+json") => {
            let Json(body) = Json::<RawMetricsInput>::from_request(request, state)
                .await
                .map_err(|rejection| invalid_request(rejection.body_text()))?;
            body
        }
        Some("application/x-www-form-urlencoded") => {
            let Form(body) = Form::<RawMetricsInput>::from_request(request, state)
                .await
                .map_err(|rejection| invalid_request(rejection.body_text()))?;
            body
        }
        _ => {
            let bytes = Bytes::from_request(request, state)
                .await
                .map_err(|rejection| invalid_request(rejection.body_text()))?;
            if !bytes.iter().all(u8::is_ascii_whitespace) {
                return Err(invalid_request(
                    "Unsupported Content-Type: send application/json or \
                     application/x-www-form-urlencoded"
                        .to_string(),
                ));
            }
            RawMetricsInput::default()
        }
    };

    Ok(body.or(query))
}

fn respond(state: &AppState, raw: RawMetricsInput, request_id: &str) -> Response {
    tracing::debug!(
        endpoint = ENDPOINT,
        request_id = request_id,
        params = ?raw,
        "Processing metrics request"
    );

    let result = log_timed_operation("evaluate_metrics", request_id, || {
        evaluate(&raw, state.location())
    });

    match result {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(error) => error_response(error.into(), Some(&format!("{:?}", raw)), request_id),
    }
}

fn invalid_request(message: String) -> ApparentError {
    ApparentError::InvalidRequest { message }
}

/// Map an error to its HTTP response, logging it with request context
fn error_response(error: ApparentError, params: Option<&str>, request_id: &str) -> Response {
    log_request_error(&error, ENDPOINT, request_id, params);

    match error {
        ApparentError::Validation(validation) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": validation.summary(),
                "details": validation.messages,
                "request_id": request_id
            })),
        )
            .into_response(),
        ApparentError::InvalidRequest { message } => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": message,
                "request_id": request_id
            })),
        )
            .into_response(),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": other.to_string(),
                "request_id": request_id
            })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use crate::config::Config;
    use crate::metrics::RawValue;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_respond_success() {
        let state = AppState::new(Config::default());
        let raw = RawMetricsInput {
            temperature: Some(RawValue::from("35")),
            humidity: Some(RawValue::from("20")),
            wind_speed: Some(RawValue::from("10")),
            wind_direction: None,
        };

        let response = respond(&state, raw, "req-1");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["input"]["windDirection"], "Unknown");
        assert_eq!(json["indices"]["uvRisk"], "High");
        assert!(json["indices"]["windChill"].is_null());
        assert_eq!(json["meta"]["location"], "Global");
    }

    #[tokio::test]
    async fn test_respond_validation_failure() {
        let state = AppState::new(Config::default());
        let response = respond(&state, RawMetricsInput::default(), "req-2");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation error");
        assert_eq!(json["details"].as_array().unwrap().len(), 3);
        assert_eq!(json["request_id"], "req-2");
    }

    #[tokio::test]
    async fn test_read_body_without_content_type_uses_query() {
        let state = Arc::new(AppState::new(Config::default()));
        let request = post("/api/weather-metrics?temperature=15&humidity=60", None, "");

        let raw = read_body_input(&state, request).await.unwrap();
        assert_eq!(raw.temperature, Some(RawValue::from("15")));
        assert_eq!(raw.humidity, Some(RawValue::from("60")));
        assert_eq!(raw.wind_speed, None);
    }

    #[tokio::test]
    async fn test_read_form_body_over_query() {
        let state = Arc::new(AppState::new(Config::default()));
        let request = post(
            "/api/weather-metrics?temperature=99&windSpeed=20",
            Some("application/x-www-form-urlencoded"),
            "temperature=15&humidity=60&windDirection=NE",
        );

        let raw = read_body_input(&state, request).await.unwrap();
        assert_eq!(raw.temperature, Some(RawValue::from("15")));
        assert_eq!(raw.humidity, Some(RawValue::from("60")));
        assert_eq!(raw.wind_speed, Some(RawValue::from("20")));
        assert_eq!(raw.wind_direction, Some(RawValue::from("NE")));
    }

    #[tokio::test]
    async fn test_read_body_rejects_unknown_content() {
        let state = Arc::new(AppState::new(Config::default()));
        let request = post("/api/weather-metrics", Some("text/plain"), "temperature=15");

        let error = read_body_input(&state, request).await.unwrap_err();
        assert!(matches!(error, ApparentError::InvalidRequest { .. }));
    }

    #[tokio::test]
    async fn test_read_malformed_json_is_invalid_request() {
        let state = Arc::new(AppState::new(Config::default()));
        let request = post("/api/weather-metrics", Some("application/json"), "{ nope");

        let error = read_body_input(&state, request).await.unwrap_err();
        let response = error_response(error, None, "req-3");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await.get("details").is_none());
    }

    #[tokio::test]
    async fn test_error_response_for_server_errors() {
        let error = ApparentError::Server {
            message: "boom".to_string(),
        };
        let response = error_response(error, None, "req-4");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
