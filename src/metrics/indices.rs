//! Closed-form apparent-temperature formulas.
//!
//! Temperatures are °C, humidity is relative humidity in %, wind speed is km/h.
//! Every value returned here is rounded with [`round2`].

/// Below this temperature (°C) the heat index regression is not applied.
pub const HEAT_INDEX_MIN_TEMPERATURE: f64 = 27.0;

/// Below this relative humidity (%) the heat index regression is not applied.
pub const HEAT_INDEX_MIN_HUMIDITY: f64 = 40.0;

/// Below this wind speed (km/h) the wind chill formula is not applied.
pub const WIND_CHILL_MIN_WIND_SPEED: f64 = 4.8;

/// Wind chill is reported, and used as feels-like, only below this temperature (°C).
pub const WIND_CHILL_MAX_TEMPERATURE: f64 = 20.0;

/// Rothfusz regression coefficients, c1 through c9.
const ROTHFUSZ: [f64; 9] = [
    -8.784695,
    1.61139411,
    2.338549,
    -0.14611605,
    -0.01230809,
    -0.01642482,
    0.00221173,
    0.00072546,
    -0.00000358,
];

// Magnus formula constants
const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

/// Round to two decimal places, halves away from zero.
///
/// Operates on the binary value, so `2.675` (stored as 2.67499…) rounds to `2.67`.
/// Magnitudes too large to scale by 100 are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Thom's discomfort index.
pub fn discomfort_index(temperature: f64, humidity: f64) -> f64 {
    round2(temperature - (0.55 - 0.0055 * humidity) * (temperature - 14.5))
}

/// Heat index via the Rothfusz regression, or the temperature itself
/// outside the hot-humid regime.
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    if temperature < HEAT_INDEX_MIN_TEMPERATURE || humidity < HEAT_INDEX_MIN_HUMIDITY {
        return round2(temperature);
    }

    let (t, rh) = (temperature, humidity);
    let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = ROTHFUSZ;
    let hi = c1
        + c2 * t
        + c3 * rh
        + c4 * t * rh
        + c5 * t * t
        + c6 * rh * rh
        + c7 * t * t * rh
        + c8 * t * rh * rh
        + c9 * t * t * rh * rh;

    round2(hi)
}

/// Wind chill candidate value. Falls back to the temperature in light wind.
///
/// This is always computed; whether it is reported is decided by
/// [`exposed_wind_chill`].
pub fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
    if wind_speed < WIND_CHILL_MIN_WIND_SPEED {
        return round2(temperature);
    }

    let w = wind_speed.powf(0.16);
    round2(13.12 + 0.6215 * temperature - 11.37 * w + 0.3965 * temperature * w)
}

/// The wind chill as reported to clients: present only below 20 °C.
pub fn exposed_wind_chill(temperature: f64, wind_speed: f64) -> Option<f64> {
    (temperature < WIND_CHILL_MAX_TEMPERATURE).then(|| wind_chill(temperature, wind_speed))
}

/// Dew point via the Magnus formula.
///
/// Returns `None` when humidity is not positive (the logarithm is undefined)
/// or when the result would not be a finite number.
pub fn dew_point(temperature: f64, humidity: f64) -> Option<f64> {
    if humidity <= 0.0 {
        return None;
    }

    let alpha = (MAGNUS_A * temperature) / (MAGNUS_B + temperature) + (humidity / 100.0).ln();
    let dew = (MAGNUS_B * alpha) / (MAGNUS_A - alpha);

    dew.is_finite().then(|| round2(dew))
}

/// Single apparent temperature: heat index when hot, wind chill when cool,
/// otherwise the air temperature.
pub fn feels_like(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    if temperature >= HEAT_INDEX_MIN_TEMPERATURE {
        heat_index(temperature, humidity)
    } else if temperature < WIND_CHILL_MAX_TEMPERATURE {
        wind_chill(temperature, wind_speed)
    } else {
        round2(temperature)
    }
}
