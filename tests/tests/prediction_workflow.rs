use serde_json::json;

use fwi_core::{classify, encode, evaluate, predict, validate, RiskLevel, ValidationError};
use fwi_model::ArtifactStore;

#[test]
fn full_prediction_workflow_from_disk_artifacts() {
    // 1. Artifacts on disk, loaded once as at process start
    let tmp = tempfile::tempdir().expect("tmpdir");
    tests::write_artifact_fixtures(tmp.path());
    let store = ArtifactStore::load(tmp.path()).expect("load artifacts");

    // 2. Untrusted JSON through each pipeline stage
    let body = json!({
        "temperature": 35, "humidity": 30, "wind_speed": 15, "rain": 0,
        "ffmc": 90, "dmc": 200, "isi": 40, "region": "Sidi-Bel-Abbes"
    });
    let request = validate(&body, store.regions()).expect("valid request");
    let features = encode(&request, store.regions());
    assert_eq!(features[..7], [35.0, 30.0, 15.0, 0.0, 90.0, 200.0, 40.0]);
    assert_eq!(features[7], 1.0); // Sidi-Bel-Abbes code

    let score = predict(&features, store.scaler(), store.model());
    assert_eq!(classify(score), RiskLevel::Extreme);

    // 3. The one-call wrapper agrees with the staged run
    let result = evaluate(&body, &store).expect("evaluate");
    assert_eq!(result.score, score);
    assert_eq!(result.level, RiskLevel::Extreme);
    assert_eq!(result.input.region, "Sidi-Bel-Abbes");
}

#[test]
fn cool_humid_weather_stays_in_the_low_band() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    tests::write_artifact_fixtures(tmp.path());
    let store = ArtifactStore::load(tmp.path()).expect("load artifacts");

    let body = json!({
        "temperature": 20, "humidity": 80, "wind_speed": 5, "rain": 2,
        "ffmc": 30, "dmc": 100, "isi": 10, "region": "Bejaia"
    });
    let result = evaluate(&body, &store).expect("evaluate");
    assert_eq!(result.level, RiskLevel::Low);
}

#[test]
fn rejected_requests_never_reach_the_model() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    tests::write_artifact_fixtures(tmp.path());
    let store = ArtifactStore::load(tmp.path()).expect("load artifacts");

    let body = json!({
        "temperature": 75, "humidity": 80, "wind_speed": 5, "rain": 2,
        "ffmc": 30, "dmc": 100, "isi": 10, "region": "Bejaia"
    });
    let err = evaluate(&body, &store).unwrap_err();
    assert_eq!(err, ValidationError::TemperatureOutOfRange);
}
