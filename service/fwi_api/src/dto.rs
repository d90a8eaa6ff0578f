//! JSON response shapes
//!
//! Field order in each struct is the serialization order of the response
//! body, matching the documented API exactly.

use serde::Serialize;
use serde_json::Value;

use fwi_core::{PredictionRequest, PredictionResult};
use fwi_model::ModelMetadata;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// The abbreviated `model_info` block embedded in prediction responses.
#[derive(Debug, Serialize)]
pub struct ModelInfoBrief {
    pub algorithm: String,
    pub test_r2_score: f64,
    pub test_mae: f64,
}

impl From<&ModelMetadata> for ModelInfoBrief {
    fn from(meta: &ModelMetadata) -> Self {
        Self {
            algorithm: meta.algorithm.clone(),
            test_r2_score: meta.r2_score,
            test_mae: meta.mae,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: f64,
    pub risk_level: &'static str,
    pub risk_color: &'static str,
    pub confidence: &'static str,
    pub input_data: PredictionRequest,
    pub timestamp: String,
    pub model_info: ModelInfoBrief,
}

impl PredictResponse {
    pub fn new(result: PredictionResult, meta: &ModelMetadata) -> Self {
        Self {
            success: true,
            prediction: round2(result.score),
            risk_level: result.level.as_str(),
            risk_color: result.level.color().as_str(),
            confidence: result.level.confidence().as_str(),
            input_data: result.input,
            timestamp: result.timestamp,
            model_info: ModelInfoBrief::from(meta),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub success: bool,
    pub model_info: ModelMetadata,
    pub features: Vec<String>,
    pub regions: Vec<String>,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ExampleDto {
    pub name: &'static str,
    pub data: Value,
    pub fwi_prediction: f64,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub success: bool,
    pub examples: Vec<ExampleDto>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub timestamp: String,
}

/// Rounds a score to two decimals at the serialization boundary.
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
