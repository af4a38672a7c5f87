//! Input validation for the metrics engine.
//!
//! Raw values arrive either as JSON numbers or as text (query strings, form
//! fields, stringly-typed JSON). Each required field is parsed independently
//! and every failure is collected into a single [`ValidationError`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Label used when no wind direction is supplied.
pub const UNKNOWN_WIND_DIRECTION: &str = "Unknown";

/// A single raw input value as received from the transport.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Anything else (booleans, arrays, objects); never a valid number.
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Unvalidated request parameters, keyed the way clients send them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetricsInput {
    #[serde(default)]
    pub temperature: Option<RawValue>,
    #[serde(default)]
    pub humidity: Option<RawValue>,
    #[serde(default)]
    pub wind_speed: Option<RawValue>,
    #[serde(default)]
    pub wind_direction: Option<RawValue>,
}

impl RawMetricsInput {
    /// Fill any field missing from `self` with the value from `fallback`.
    pub fn or(self, fallback: RawMetricsInput) -> Self {
        Self {
            temperature: self.temperature.or(fallback.temperature),
            humidity: self.humidity.or(fallback.humidity),
            wind_speed: self.wind_speed.or(fallback.wind_speed),
            wind_direction: self.wind_direction.or(fallback.wind_direction),
        }
    }
}

/// Validated, immutable engine input.
///
/// Temperature in °C, relative humidity in %, wind speed in km/h.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsInput {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
}

enum FieldError {
    Missing,
    NotANumber,
}

fn parse_number(value: Option<&RawValue>) -> Result<f64, FieldError> {
    let parsed = match value {
        None => return Err(FieldError::Missing),
        Some(RawValue::Number(n)) => Some(*n),
        Some(RawValue::Text(s)) if s.trim().is_empty() => return Err(FieldError::Missing),
        Some(RawValue::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(RawValue::Other(serde_json::Value::Null)) => return Err(FieldError::Missing),
        Some(RawValue::Other(_)) => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(FieldError::NotANumber),
    }
}

fn wind_direction_label(value: Option<&RawValue>) -> String {
    match value {
        Some(RawValue::Text(s)) if !s.is_empty() => s.clone(),
        Some(RawValue::Number(n)) => n.to_string(),
        _ => UNKNOWN_WIND_DIRECTION.to_string(),
    }
}

/// Validate all required fields in one pass.
///
/// Returns every failing field's message, in the order temperature,
/// humidity, windSpeed. Wind direction never fails.
pub fn validate(raw: &RawMetricsInput) -> Result<MetricsInput, ValidationError> {
    let mut messages = Vec::new();
    let mut check = |name: &str, value: Option<&RawValue>| match parse_number(value) {
        Ok(n) => Some(n),
        Err(FieldError::Missing) => {
            messages.push(format!("{name} is required"));
            None
        }
        Err(FieldError::NotANumber) => {
            messages.push(format!("{name} must be a valid number"));
            None
        }
    };

    let temperature = check("temperature", raw.temperature.as_ref());
    let humidity = check("humidity", raw.humidity.as_ref());
    let wind_speed = check("windSpeed", raw.wind_speed.as_ref());

    match (temperature, humidity, wind_speed) {
        (Some(temperature), Some(humidity), Some(wind_speed)) => Ok(MetricsInput {
            temperature,
            humidity,
            wind_speed,
            wind_direction: wind_direction_label(raw.wind_direction.as_ref()),
        }),
        _ => Err(ValidationError::new(messages)),
    }
}
