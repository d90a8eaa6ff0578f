//! Region name to integer-code encoding

use std::collections::BTreeMap;

use crate::ArtifactError;

/// The region encoding learned at training time.
///
/// Maps each region name to the non-negative integer code the model was
/// trained with. Names are listed in sorted order wherever they are
/// enumerated (error messages, the home page, `/api/model-info`).
#[derive(Debug, Clone)]
pub struct RegionTable {
    codes: BTreeMap<String, u32>,
}

impl RegionTable {
    /// Creates a table from a name → code mapping.
    ///
    /// # Errors
    /// Returns `ArtifactError::EmptyRegionTable` if the mapping is empty.
    pub fn new(codes: BTreeMap<String, u32>) -> Result<Self, ArtifactError> {
        if codes.is_empty() {
            return Err(ArtifactError::EmptyRegionTable);
        }
        Ok(Self { codes })
    }

    /// Looks up the integer code for a region name.
    pub fn code(&self, name: &str) -> Option<u32> {
        self.codes.get(name).copied()
    }

    /// Returns true if the name is a known region.
    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// All region names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.codes.keys().cloned().collect()
    }
}
