//! Model metadata reported by the API

use serde::{Deserialize, Serialize};

/// Summary of the offline training run that produced the artifacts.
///
/// Compiled in rather than loaded, so it stays available even when the
/// artifact files are missing and the service runs degraded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub algorithm: String,
    pub optimal_alpha: f64,
    pub r2_score: f64,
    pub mae: f64,
    pub rmse: f64,
    pub test_accuracy: String,
    pub samples_trained: u32,
    pub features: u32,
}

impl ModelMetadata {
    /// Metadata for the shipped ridge regression FWI model.
    pub fn fwi_ridge() -> Self {
        Self {
            algorithm: "Ridge Regression".to_string(),
            optimal_alpha: 0.8302,
            r2_score: 0.9829,
            mae: 1.6154,
            rmse: 2.0807,
            test_accuracy: "98.29%".to_string(),
            samples_trained: 400,
            features: 8,
        }
    }
}
