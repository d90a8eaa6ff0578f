//! Integration and system tests for the FWI prediction service.
//!
//! The library target only carries shared fixtures; the tests themselves
//! live under `tests/`.

use std::fs;
use std::path::Path;

/// Writes the four artifact files the service loads at startup, using the
/// shipped model parameters.
pub fn write_artifact_fixtures(dir: &Path) {
    fs::write(
        dir.join("model.json"),
        r#"{"coefficients":[1.5,-2.0,1.2,-1.0,4.0,3.5,9.5,0.5],"intercept":15.0}"#,
    )
    .expect("write model.json");
    fs::write(
        dir.join("scaler.json"),
        r#"{"mean":[29.0,60.0,14.0,0.8,75.0,120.0,15.0,0.5],"scale":[5.0,15.0,4.0,1.5,20.0,80.0,10.0,0.5]}"#,
    )
    .expect("write scaler.json");
    fs::write(
        dir.join("feature_cols.json"),
        r#"["temperature","humidity","wind_speed","rain","ffmc","dmc","isi","region_encoded"]"#,
    )
    .expect("write feature_cols.json");
    fs::write(
        dir.join("region_mapping.json"),
        r#"{"Bejaia":0,"Sidi-Bel-Abbes":1}"#,
    )
    .expect("write region_mapping.json");
}
