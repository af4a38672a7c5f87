//! The weather metrics engine.
//!
//! Turns temperature, humidity and wind speed into derived comfort indices and
//! categorical forecasts. Everything here is a pure function of its inputs
//! apart from the timestamp stamped into [`Meta`].

pub mod forecast;
pub mod indices;
pub mod validation;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ValidationError;
use forecast::{clothing_suggestion_for, ComfortLevel, RainPrediction, UvRisk, WindWarning};
pub use validation::{validate, MetricsInput, RawMetricsInput, RawValue};

/// Derived numeric indices, plus the UV risk band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indices {
    pub discomfort_index: f64,
    pub heat_index: f64,
    pub wind_chill: Option<f64>,
    pub dew_point: Option<f64>,
    pub feels_like: f64,
    pub uv_risk: UvRisk,
}

/// Categorical outlook derived from the readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub rain_prediction: RainPrediction,
    pub wind_warning: WindWarning,
    pub comfort_level: ComfortLevel,
    pub clothing_suggestion: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// RFC 3339 generation time, UTC, millisecond precision
    pub server_time: String,
    pub location: String,
}

/// Complete response for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub input: MetricsInput,
    pub indices: Indices,
    pub weather_forecast: WeatherForecast,
    pub meta: Meta,
}

impl MetricsResult {
    /// Assemble a result for already-validated input, stamped with `generated_at`.
    pub fn new(input: MetricsInput, location: &str, generated_at: DateTime<Utc>) -> Self {
        let (indices, weather_forecast) = compute_metrics(&input);
        Self {
            input,
            indices,
            weather_forecast,
            meta: Meta {
                server_time: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                location: location.to_string(),
            },
        }
    }
}

/// Compute every derived value for a validated input.
pub fn compute_metrics(input: &MetricsInput) -> (Indices, WeatherForecast) {
    let MetricsInput {
        temperature: t,
        humidity: h,
        wind_speed: w,
        ..
    } = *input;

    let discomfort = indices::discomfort_index(t, h);
    let comfort_level = ComfortLevel::classify(discomfort);

    let indices = Indices {
        discomfort_index: discomfort,
        heat_index: indices::heat_index(t, h),
        wind_chill: indices::exposed_wind_chill(t, w),
        dew_point: indices::dew_point(t, h),
        feels_like: indices::feels_like(t, h, w),
        uv_risk: UvRisk::classify(t, h),
    };

    let forecast = WeatherForecast {
        rain_prediction: RainPrediction::classify(t, h, w),
        wind_warning: WindWarning::classify(w),
        comfort_level,
        clothing_suggestion: clothing_suggestion_for(comfort_level.label()),
    };

    (indices, forecast)
}

/// Validate raw input and, if every field is valid, compute the full result.
///
/// No derived value is computed when validation fails.
pub fn evaluate(
    raw: &RawMetricsInput,
    location: &str,
) -> Result<MetricsResult, ValidationError> {
    let input = validate(raw)?;
    Ok(MetricsResult::new(input, location, Utc::now()))
}
