use fwi_model::{ArtifactStore, ModelMetadata};

/// Process-wide immutable state, established once before the server starts
/// accepting requests and shared read-only across all of them.
///
/// `artifacts` is `None` when the artifact files could not be loaded; the
/// service then runs degraded ("model not loaded") instead of refusing to
/// start. The metadata is compiled in and always available.
pub struct AppState {
    pub artifacts: Option<ArtifactStore>,
    pub metadata: ModelMetadata,
}

impl AppState {
    pub fn new(artifacts: Option<ArtifactStore>) -> Self {
        Self {
            artifacts,
            metadata: ModelMetadata::fwi_ridge(),
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.artifacts.is_some()
    }
}
