use fwi_model::{RidgeModel, StandardScaler, FEATURE_COUNT};

/// Runs the two-step inference: standardize the raw vector, then apply the
/// affine regression. The output is a single unbounded score.
///
/// Infallible per request — dimension mismatches between vector, scaler and
/// model are rejected once at artifact load, never here.
pub fn predict(
    features: &[f64; FEATURE_COUNT],
    scaler: &StandardScaler,
    model: &RidgeModel,
) -> f64 {
    model.predict(&scaler.transform(features))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_scaler() -> StandardScaler {
        StandardScaler::new(vec![0.0; FEATURE_COUNT], vec![1.0; FEATURE_COUNT]).unwrap()
    }

    #[test]
    fn standardizes_then_regresses() {
        let scaler = StandardScaler::new(
            vec![10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        )
        .unwrap();
        let model = RidgeModel::new(vec![3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1.0).unwrap();
        // scaled temperature = (14 - 10) / 2 = 2, score = 1 + 3 * 2 = 7
        let score = predict(&[14.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], &scaler, &model);
        assert!((score - 7.0).abs() < 1e-12);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let scaler = identity_scaler();
        let model =
            RidgeModel::new(vec![0.5, -0.25, 1.0, 0.0, 2.0, -1.0, 0.75, 0.1], -3.0).unwrap();
        let features = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(
            predict(&features, &scaler, &model),
            predict(&features, &scaler, &model)
        );
    }

    #[test]
    fn output_is_unbounded() {
        let scaler = identity_scaler();
        let model = RidgeModel::new(vec![-100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 0.0).unwrap();
        let score = predict(&[50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], &scaler, &model);
        assert!(score < -4000.0);
    }
}
