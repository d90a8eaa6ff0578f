//! Error types for artifact loading

use thiserror::Error;

/// Errors raised while loading or cross-checking trained artifacts.
///
/// These are startup-class failures: the caller either aborts or falls back
/// to a degraded "model not loaded" state. They never occur per request.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read artifact file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in artifact file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{what} has length {got}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("scaler scale[{index}] is zero")]
    ZeroScale { index: usize },
    #[error("region mapping is empty")]
    EmptyRegionTable,
}
