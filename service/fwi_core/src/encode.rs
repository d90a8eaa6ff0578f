use fwi_model::{RegionTable, FEATURE_COUNT};

use crate::PredictionRequest;

/// Encodes a validated request into the fixed-order feature vector.
///
/// The order [temperature, humidity, wind_speed, rain, ffmc, dmc, isi,
/// region_code] is the contract the scaler and model were trained against;
/// reordering silently corrupts predictions. Pure and infallible — region
/// membership is already guaranteed by the validator.
pub fn encode(request: &PredictionRequest, regions: &RegionTable) -> [f64; FEATURE_COUNT] {
    let code = regions.code(&request.region);
    debug_assert!(code.is_some(), "validated requests carry a known region");
    [
        request.temperature,
        request.humidity,
        request.wind_speed,
        request.rain,
        request.ffmc,
        request.dmc,
        request.isi,
        code.map_or(0.0, f64::from),
    ]
}
