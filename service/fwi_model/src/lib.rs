//! Trained artifacts for the FWI prediction service.
//!
//! Provides the immutable objects produced by the offline training run —
//! the ridge regression model, the feature scaler, the region encoding
//! table, and model metadata — plus an [`ArtifactStore`] that loads and
//! cross-checks them once at process start.

pub mod error;
pub mod metadata;
pub mod regions;
pub mod ridge;
pub mod scaler;
pub mod store;

pub use error::ArtifactError;
pub use metadata::ModelMetadata;
pub use regions::RegionTable;
pub use ridge::RidgeModel;
pub use scaler::StandardScaler;
pub use store::ArtifactStore;

/// Number of encoded input features, fixed at training time.
///
/// The feature order is [temperature, humidity, wind_speed, rain, ffmc,
/// dmc, isi, region_code]; encoder and artifacts share this contract.
pub const FEATURE_COUNT: usize = 8;
