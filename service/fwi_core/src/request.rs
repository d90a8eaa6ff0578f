use serde::Serialize;

/// A fully validated prediction request.
///
/// Only the validator constructs this: every numeric field is within its
/// documented range and `region` is a known region name, trimmed. The
/// field order is the echo order of the `input_data` response block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub rain: f64,
    pub ffmc: f64,
    pub dmc: f64,
    pub isi: f64,
    pub region: String,
}
