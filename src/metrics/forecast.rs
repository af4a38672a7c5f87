//! Threshold classifiers turning raw readings into categorical labels.
//!
//! Each classifier evaluates its rules top to bottom; the first match wins.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Suggestion returned for a comfort label this service does not recognise.
pub const DEFAULT_CLOTHING_SUGGESTION: &str = "Dress appropriately for the current weather";

/// Likelihood of rain from humidity, temperature and wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RainPrediction {
    High,
    Medium,
    Low,
}

impl RainPrediction {
    pub fn classify(temperature: f64, humidity: f64, wind_speed: f64) -> Self {
        if humidity > 85.0 && temperature < 30.0 && wind_speed < 6.0 {
            RainPrediction::High
        } else if humidity > 75.0 && temperature < 32.0 {
            RainPrediction::Medium
        } else {
            RainPrediction::Low
        }
    }
}

/// Wind warning level from wind speed in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindWarning {
    #[serde(rename = "Strong Winds")]
    StrongWinds,
    Breezy,
    None,
}

impl WindWarning {
    pub fn classify(wind_speed: f64) -> Self {
        if wind_speed > 25.0 {
            WindWarning::StrongWinds
        } else if wind_speed > 15.0 {
            WindWarning::Breezy
        } else {
            WindWarning::None
        }
    }
}

/// UV exposure risk, estimated from temperature and humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UvRisk {
    High,
    Moderate,
    Low,
}

impl UvRisk {
    pub fn classify(temperature: f64, humidity: f64) -> Self {
        if temperature > 30.0 && humidity < 50.0 {
            UvRisk::High
        } else if temperature > 25.0 {
            UvRisk::Moderate
        } else {
            UvRisk::Low
        }
    }
}

/// Thermal comfort band derived from the discomfort index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComfortLevel {
    Comfortable,
    #[serde(rename = "Slightly Warm")]
    SlightlyWarm,
    Uncomfortable,
    #[serde(rename = "Very Uncomfortable")]
    VeryUncomfortable,
    #[serde(rename = "Extremely Uncomfortable")]
    ExtremelyUncomfortable,
}

impl ComfortLevel {
    pub const ALL: [ComfortLevel; 5] = [
        ComfortLevel::Comfortable,
        ComfortLevel::SlightlyWarm,
        ComfortLevel::Uncomfortable,
        ComfortLevel::VeryUncomfortable,
        ComfortLevel::ExtremelyUncomfortable,
    ];

    pub fn classify(discomfort_index: f64) -> Self {
        if discomfort_index < 21.0 {
            ComfortLevel::Comfortable
        } else if discomfort_index < 24.0 {
            ComfortLevel::SlightlyWarm
        } else if discomfort_index < 27.0 {
            ComfortLevel::Uncomfortable
        } else if discomfort_index < 29.0 {
            ComfortLevel::VeryUncomfortable
        } else {
            ComfortLevel::ExtremelyUncomfortable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComfortLevel::Comfortable => "Comfortable",
            ComfortLevel::SlightlyWarm => "Slightly Warm",
            ComfortLevel::Uncomfortable => "Uncomfortable",
            ComfortLevel::VeryUncomfortable => "Very Uncomfortable",
            ComfortLevel::ExtremelyUncomfortable => "Extremely Uncomfortable",
        }
    }

    pub fn clothing_suggestion(self) -> &'static str {
        match self {
            ComfortLevel::Comfortable => "Light layers are fine; a light jacket for the evening",
            ComfortLevel::SlightlyWarm => "Short sleeves and breathable fabrics",
            ComfortLevel::Uncomfortable => "Loose, light-colored clothing; stay hydrated",
            ComfortLevel::VeryUncomfortable => {
                "Minimal, moisture-wicking clothing and a hat; limit exertion"
            }
            ComfortLevel::ExtremelyUncomfortable => {
                "Stay indoors if possible; otherwise the lightest clothing and sun protection"
            }
        }
    }
}

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComfortLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComfortLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| format!("Unknown comfort level: {}", s))
    }
}

/// Clothing suggestion for a comfort label, with a fallback for labels
/// outside the known set.
pub fn clothing_suggestion_for(label: &str) -> &'static str {
    label
        .parse::<ComfortLevel>()
        .map(ComfortLevel::clothing_suggestion)
        .unwrap_or(DEFAULT_CLOTHING_SUGGESTION)
}
