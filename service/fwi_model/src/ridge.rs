//! The fitted ridge regression model

use crate::{ArtifactError, FEATURE_COUNT};

/// A fitted linear model: `score = intercept + coefficients · features`.
///
/// The coefficient length is enforced by [`RidgeModel::new`], so
/// [`predict`](RidgeModel::predict) cannot fail.
#[derive(Debug, Clone)]
pub struct RidgeModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl RidgeModel {
    /// Creates a model from fitted parameters.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the coefficient vector does not have
    /// [`FEATURE_COUNT`] elements.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ArtifactError> {
        if coefficients.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                what: "model coefficients",
                got: coefficients.len(),
                expected: FEATURE_COUNT,
            });
        }
        Ok(Self {
            coefficients,
            intercept,
        })
    }

    /// Applies the affine regression to an already-standardized vector.
    ///
    /// The output is unbounded; discretization into risk bands happens
    /// downstream.
    pub fn predict(&self, scaled: &[f64; FEATURE_COUNT]) -> f64 {
        let dot = self
            .coefficients
            .iter()
            .zip(scaled.iter())
            .map(|(c, x)| c * x)
            .sum::<f64>();
        self.intercept + dot
    }
}
