//! Per-feature standardization

use crate::{ArtifactError, FEATURE_COUNT};

/// Standardizes raw feature vectors with the per-feature mean and scale
/// learned during training.
///
/// Lengths and nonzero scales are enforced by [`StandardScaler::new`], so
/// [`transform`](StandardScaler::transform) cannot fail.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Creates a scaler from trained statistics.
    ///
    /// # Errors
    /// Returns `ArtifactError` if either vector does not have
    /// [`FEATURE_COUNT`] elements or any scale entry is zero.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        if mean.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                what: "scaler mean",
                got: mean.len(),
                expected: FEATURE_COUNT,
            });
        }
        if scale.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                what: "scaler scale",
                got: scale.len(),
                expected: FEATURE_COUNT,
            });
        }
        if let Some(index) = scale.iter().position(|&s| s == 0.0) {
            return Err(ArtifactError::ZeroScale { index });
        }
        Ok(Self { mean, scale })
    }

    /// Standardizes a raw feature vector: `(x - mean) / scale` per feature.
    pub fn transform(&self, raw: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, out) in scaled.iter_mut().enumerate() {
            *out = (raw[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}
