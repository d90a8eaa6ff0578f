use std::fs;

use fwi_model::{ArtifactError, ArtifactStore};

#[test]
fn an_empty_artifact_directory_fails_the_load() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let res = ArtifactStore::load(tmp.path());
    assert!(matches!(res.unwrap_err(), ArtifactError::Read { .. }));
}

#[test]
fn artifact_dimension_mismatches_are_caught_at_load_time() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    tests::write_artifact_fixtures(tmp.path());
    fs::write(
        tmp.path().join("scaler.json"),
        r#"{"mean":[0.0,0.0,0.0],"scale":[1.0,1.0,1.0]}"#,
    )
    .expect("corrupt scaler");

    let res = ArtifactStore::load(tmp.path());
    assert!(matches!(
        res.unwrap_err(),
        ArtifactError::DimensionMismatch { what: "scaler mean", .. }
    ));
}
