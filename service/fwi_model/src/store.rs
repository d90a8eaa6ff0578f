//! Loading and cross-checking of the trained artifact files
//!
//! The store reads the four JSON files the training run exported and
//! validates every dimension once, so the inference path never has to.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{ArtifactError, RegionTable, RidgeModel, StandardScaler, FEATURE_COUNT};

/// File names inside the artifact directory.
pub const MODEL_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const FEATURE_COLS_FILE: &str = "feature_cols.json";
pub const REGION_MAPPING_FILE: &str = "region_mapping.json";

#[derive(Debug, Deserialize)]
struct ModelFile {
    coefficients: Vec<f64>,
    intercept: f64,
}

#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// The complete set of trained artifacts, immutable after loading.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    model: RidgeModel,
    scaler: StandardScaler,
    regions: RegionTable,
    features: Vec<String>,
}

impl ArtifactStore {
    /// Assembles a store from already-built artifacts.
    ///
    /// # Errors
    /// Returns `ArtifactError` if the feature-name list does not have
    /// [`FEATURE_COUNT`] entries. The individual artifact constructors
    /// enforce their own dimensions.
    pub fn new(
        model: RidgeModel,
        scaler: StandardScaler,
        regions: RegionTable,
        features: Vec<String>,
    ) -> Result<Self, ArtifactError> {
        if features.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                what: "feature columns",
                got: features.len(),
                expected: FEATURE_COUNT,
            });
        }
        Ok(Self {
            model,
            scaler,
            regions,
            features,
        })
    }

    /// Loads all four artifact files from `dir`.
    ///
    /// # Errors
    /// Returns `ArtifactError` on the first unreadable or malformed file,
    /// or on any dimension mismatch between the artifacts.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();

        let model: ModelFile = read_json(&dir.join(MODEL_FILE))?;
        let scaler: ScalerFile = read_json(&dir.join(SCALER_FILE))?;
        let features: Vec<String> = read_json(&dir.join(FEATURE_COLS_FILE))?;
        let mapping: BTreeMap<String, u32> = read_json(&dir.join(REGION_MAPPING_FILE))?;

        let store = Self::new(
            RidgeModel::new(model.coefficients, model.intercept)?,
            StandardScaler::new(scaler.mean, scaler.scale)?,
            RegionTable::new(mapping)?,
            features,
        )?;
        log::info!(
            "loaded model artifacts from {} ({} features, {} regions)",
            dir.display(),
            store.features.len(),
            store.regions.names().len()
        );
        Ok(store)
    }

    pub fn model(&self) -> &RidgeModel {
        &self.model
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Ordered feature-column names from the training run.
    pub fn features(&self) -> &[String] {
        &self.features
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}
