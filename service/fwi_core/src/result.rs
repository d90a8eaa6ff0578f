//! End-to-end request evaluation

use serde_json::Value;

use fwi_model::ArtifactStore;

use crate::{classify, encode, predict, validate, PredictionRequest, RiskLevel, ValidationError};

/// The outcome of one evaluated request.
///
/// Transient: constructed per request, serialized into the response, never
/// persisted. Color and confidence derive from `level`.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub score: f64,
    pub level: RiskLevel,
    pub input: PredictionRequest,
    pub timestamp: String,
}

/// Runs the full pipeline over a parsed JSON body: validate → encode →
/// standardize + regress → classify, stamped with the current UTC time.
///
/// # Errors
/// Returns the [`ValidationError`] for the first violated constraint; the
/// inference steps themselves cannot fail.
pub fn evaluate(body: &Value, artifacts: &ArtifactStore) -> Result<PredictionResult, ValidationError> {
    let input = validate(body, artifacts.regions())?;
    let features = encode(&input, artifacts.regions());
    let score = predict(&features, artifacts.scaler(), artifacts.model());
    Ok(PredictionResult {
        score,
        level: classify(score),
        input,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
