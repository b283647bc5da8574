//! XGBoost inference tests: model loading and prediction against reference outputs.
//!
//! Test cases live in `tests/test-cases/xgboost/gbtree/{name}.*`.

mod common;

use std::num::NonZeroUsize;

use rstest::rstest;
use xgb_predict::{
    transform, Objective, Parallelism, PredictError, PredictOptions, Transformation,
};

use common::{assert_slices_approx_eq, load_gbtree, DEFAULT_TOLERANCE};

// =============================================================================
// Parsing
// =============================================================================

#[rstest]
#[case("gbtree_regression", 1, 2, Objective::RegSquaredError, Transformation::Identity, 0.5)]
#[case("gbtree_binary_logistic", 1, 2, Objective::BinaryLogistic, Transformation::Sigmoid, 0.0)]
#[case("gbtree_multiclass", 3, 6, Objective::MultiSoftprob, Transformation::Softmax, 0.5)]
fn parse_model(
    #[case] name: &str,
    #[case] n_groups: usize,
    #[case] n_trees: usize,
    #[case] objective: Objective,
    #[case] transformation: Transformation,
    #[case] base_score: f32,
) {
    let case = load_gbtree(name);
    assert_eq!(case.model.n_groups(), n_groups);
    assert_eq!(case.model.n_trees(), n_trees);
    assert_eq!(case.model.objective(), &objective);
    assert_eq!(case.model.transformation(), transformation);
    assert_eq!(case.model.base_score(), base_score);
    assert_eq!(case.expected.objective.as_deref(), Some(objective.name()));
}

#[test]
fn multiclass_groups_follow_tree_info() {
    let case = load_gbtree("gbtree_multiclass");
    let sizes: Vec<usize> = case.model.predictors().iter().map(|p| p.n_trees()).collect();
    assert_eq!(sizes, vec![2, 2, 2]);
    assert_eq!(case.expected.n_class, Some(3));
}

// =============================================================================
// Single-sample prediction
// =============================================================================

#[rstest]
#[case("gbtree_regression")]
#[case("gbtree_binary_logistic")]
#[case("gbtree_multiclass")]
fn predict_margins_match_reference(#[case] name: &str) {
    let case = load_gbtree(name);
    let expected = case.expected.margin_rows().unwrap();

    for (i, (row, want)) in case.input.to_sparse_rows().iter().zip(&expected).enumerate() {
        let got = case.model.predict(row, true);
        assert_slices_approx_eq(&got, want, DEFAULT_TOLERANCE, &format!("{name} margin row {i}"));
    }
}

#[rstest]
#[case("gbtree_regression")]
#[case("gbtree_binary_logistic")]
#[case("gbtree_multiclass")]
fn predict_transformed_match_reference(#[case] name: &str) {
    let case = load_gbtree(name);
    let expected = case.expected.transformed_rows().unwrap().unwrap();

    for (i, (row, want)) in case.input.to_sparse_rows().iter().zip(&expected).enumerate() {
        let got = case.model.predict(row, false);
        assert_slices_approx_eq(&got, want, DEFAULT_TOLERANCE, &format!("{name} row {i}"));
    }
}

#[test]
fn regression_output_is_bit_stable() {
    let case = load_gbtree("gbtree_regression");
    let rows = case.input.to_sparse_rows();
    let got: Vec<f32> = rows.iter().map(|row| case.model.predict(row, false)[0]).collect();
    assert_eq!(got, vec![0.875, -0.125, 1.125, 0.625, 1.125]);
}

#[rstest]
#[case("gbtree_regression")]
#[case("gbtree_binary_logistic")]
#[case("gbtree_multiclass")]
fn margin_and_prediction_differ_by_transformation(#[case] name: &str) {
    let case = load_gbtree(name);
    for row in case.input.to_sparse_rows() {
        let mut margins = case.model.predict(&row, true);
        transform(&mut margins, case.model.transformation());
        assert_eq!(margins, case.model.predict(&row, false));
    }
}

#[rstest]
#[case("gbtree_regression")]
#[case("gbtree_binary_logistic")]
#[case("gbtree_multiclass")]
fn dense_rows_match_sparse_rows(#[case] name: &str) {
    let case = load_gbtree(name);
    for (sparse, dense) in case.input.to_sparse_rows().iter().zip(case.input.to_f32_rows()) {
        assert_eq!(case.model.predict(sparse, false), case.model.predict(&dense, false));
    }
}

#[test]
fn short_rows_route_missing() {
    let case = load_gbtree("gbtree_regression");
    let short = case.model.predict(&[0.7f32], true);
    let padded = case.model.predict(&[Some(0.7f32), None, None], true);
    assert_eq!(short, padded);
    assert_eq!(short, vec![1.125]);
}

#[test]
fn model_is_shareable_across_threads() {
    let case = load_gbtree("gbtree_multiclass");
    let rows = case.input.to_sparse_rows();
    let reference: Vec<Vec<f32>> = rows.iter().map(|row| case.model.predict(row, false)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| rows.iter().map(|row| case.model.predict(row, false)).collect::<Vec<_>>())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}

// =============================================================================
// Batch prediction
// =============================================================================

#[rstest]
#[case("gbtree_regression")]
#[case("gbtree_binary_logistic")]
fn batch_matches_reference(#[case] name: &str) {
    let case = load_gbtree(name);
    let rows = case.input.to_sparse_rows();

    let margins = case.model.predict_batch(&rows, true).unwrap();
    let expected: Vec<f64> = case.expected.margin_rows().unwrap().concat();
    assert_slices_approx_eq(&margins, &expected, DEFAULT_TOLERANCE, name);

    let transformed = case.model.predict_batch(&rows, false).unwrap();
    let expected: Vec<f64> = case.expected.transformed_rows().unwrap().unwrap().concat();
    assert_slices_approx_eq(&transformed, &expected, DEFAULT_TOLERANCE, name);
}

#[test]
fn batch_rejects_multiclass() {
    let case = load_gbtree("gbtree_multiclass");
    let rows = case.input.to_sparse_rows();
    assert_eq!(
        case.model.predict_batch(&rows, false),
        Err(PredictError::IncompatibleModelSize { n_groups: 3 })
    );
    assert_eq!(
        case.model.predict_batch(&rows, true),
        Err(PredictError::IncompatibleModelSize { n_groups: 3 })
    );
}

#[rstest]
#[case("gbtree_regression")]
#[case("gbtree_binary_logistic")]
fn parallel_batch_equals_sequential(#[case] name: &str) {
    let case = load_gbtree(name);
    let rows: Vec<Vec<f32>> = case.input.to_f32_rows().into_iter().cycle().take(1_000).collect();

    let sequential = case.model.predict_batch(&rows, false).unwrap();
    for n_threads in [None, NonZeroUsize::new(1), NonZeroUsize::new(3)] {
        let options = PredictOptions::builder()
            .parallelism(Parallelism::Parallel)
            .maybe_n_threads(n_threads)
            .build();
        assert_eq!(case.model.predict_batch_with(&rows, &options).unwrap(), sequential);
    }
}

// =============================================================================
// Matrix prediction
// =============================================================================

#[rstest]
#[case("gbtree_regression", Parallelism::Sequential)]
#[case("gbtree_binary_logistic", Parallelism::Parallel)]
#[case("gbtree_multiclass", Parallelism::Sequential)]
#[case("gbtree_multiclass", Parallelism::Parallel)]
fn matrix_rows_equal_predict(#[case] name: &str, #[case] parallelism: Parallelism) {
    let case = load_gbtree(name);
    let features = case.input.to_array();
    assert_eq!(features.nrows(), case.input.n_rows);

    for output_margin in [false, true] {
        let options = PredictOptions::builder()
            .output_margin(output_margin)
            .parallelism(parallelism)
            .build();
        let output = case.model.predict_matrix(features.view(), &options);
        assert_eq!(output.shape(), &[case.input.n_rows, case.model.n_groups()]);

        for (i, row) in case.input.to_sparse_rows().iter().enumerate() {
            assert_eq!(output.row(i).to_vec(), case.model.predict(row, output_margin), "{name} row {i}");
        }
    }
}
