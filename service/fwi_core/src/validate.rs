//! Request validation: loosely-typed JSON in, typed request or error out.

use serde_json::{Map, Value};
use thiserror::Error;

use fwi_model::RegionTable;

use crate::PredictionRequest;

/// The keys a prediction request must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "temperature",
    "humidity",
    "wind_speed",
    "rain",
    "ffmc",
    "dmc",
    "isi",
    "region",
];

/// A rejected prediction request.
///
/// Each variant's message is the user-facing error string; the API layer
/// surfaces it verbatim in the 400 response body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required fields. Expected: {0:?}")]
    MissingFields(Vec<&'static str>),
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
    #[error("region must be a string")]
    RegionNotAString,
    #[error("Temperature must be between 0 and 50°C")]
    TemperatureOutOfRange,
    #[error("Humidity must be between 0 and 100%")]
    HumidityOutOfRange,
    #[error("Wind speed must be between 0 and 50 km/h")]
    WindSpeedOutOfRange,
    #[error("Rain cannot be negative")]
    NegativeRain,
    #[error("FFMC must be between 0 and 100")]
    FfmcOutOfRange,
    #[error("DMC must be between 0 and 300")]
    DmcOutOfRange,
    #[error("ISI must be between 0 and 50")]
    IsiOutOfRange,
    #[error("Region must be one of: {0:?}")]
    UnknownRegion(Vec<String>),
}

/// Validates a parsed JSON body into a typed [`PredictionRequest`].
///
/// Checks run in a fixed order — presence of all required keys, type
/// coercion field by field, then the documented range for each field, then
/// region membership — and the first violation wins. No partial result is
/// ever produced.
///
/// # Errors
/// Returns the [`ValidationError`] describing the first violated
/// constraint.
pub fn validate(body: &Value, regions: &RegionTable) -> Result<PredictionRequest, ValidationError> {
    let Some(obj) = body.as_object() else {
        return Err(ValidationError::MissingFields(REQUIRED_FIELDS.to_vec()));
    };
    if REQUIRED_FIELDS.iter().any(|field| !obj.contains_key(*field)) {
        return Err(ValidationError::MissingFields(REQUIRED_FIELDS.to_vec()));
    }

    let temperature = number(obj, "temperature")?;
    let humidity = number(obj, "humidity")?;
    let wind_speed = number(obj, "wind_speed")?;
    let rain = number(obj, "rain")?;
    let ffmc = number(obj, "ffmc")?;
    let dmc = number(obj, "dmc")?;
    let isi = number(obj, "isi")?;
    let region = match &obj["region"] {
        Value::String(s) => s.trim().to_string(),
        _ => return Err(ValidationError::RegionNotAString),
    };

    if !(0.0..=50.0).contains(&temperature) {
        return Err(ValidationError::TemperatureOutOfRange);
    }
    if !(0.0..=100.0).contains(&humidity) {
        return Err(ValidationError::HumidityOutOfRange);
    }
    if !(0.0..=50.0).contains(&wind_speed) {
        return Err(ValidationError::WindSpeedOutOfRange);
    }
    if rain < 0.0 {
        return Err(ValidationError::NegativeRain);
    }
    if !(0.0..=100.0).contains(&ffmc) {
        return Err(ValidationError::FfmcOutOfRange);
    }
    if !(0.0..=300.0).contains(&dmc) {
        return Err(ValidationError::DmcOutOfRange);
    }
    if !(0.0..=50.0).contains(&isi) {
        return Err(ValidationError::IsiOutOfRange);
    }
    if !regions.contains(&region) {
        return Err(ValidationError::UnknownRegion(regions.names()));
    }

    Ok(PredictionRequest {
        temperature,
        humidity,
        wind_speed,
        rain,
        ffmc,
        dmc,
        isi,
        region,
    })
}

/// Coerces a field to a finite `f64`, accepting JSON numbers and numeric
/// strings.
fn number(obj: &Map<String, Value>, field: &'static str) -> Result<f64, ValidationError> {
    let value = match &obj[field] {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}
