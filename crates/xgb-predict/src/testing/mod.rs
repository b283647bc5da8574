//! Shared fixtures and assertions for prediction tests.
//!
//! Test cases live next to each other as `{name}.model.json`,
//! `{name}.input.json` and `{name}.expected.json`. The input and expected
//! files are described by [`TestInput`] and [`TestExpected`].

use ndarray::Array2;
use serde::Deserialize;

/// Default absolute tolerance when comparing predictions with reference values.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Input features for a test case, loaded from JSON.
///
/// Expects JSON format:
/// ```json
/// {
///   "features": [[1.0, 2.0, null], [3.0, 4.0, 5.0]],
///   "num_rows": 2,
///   "num_features": 3
/// }
/// ```
///
/// `null` marks a missing feature. Rows may be shorter than `num_features`.
#[derive(Debug, Clone, Deserialize)]
pub struct TestInput {
    pub features: Vec<Vec<Option<f64>>>,
    #[serde(rename = "num_rows")]
    pub n_rows: usize,
    #[serde(rename = "num_features")]
    pub n_features: usize,
}

impl TestInput {
    /// Rows with an explicit presence flag per slot.
    pub fn to_sparse_rows(&self) -> Vec<Vec<Option<f32>>> {
        self.features
            .iter()
            .map(|row| row.iter().map(|x| x.map(|v| v as f32)).collect())
            .collect()
    }

    /// Dense rows, mapping missing to NaN.
    pub fn to_f32_rows(&self) -> Vec<Vec<f32>> {
        self.features
            .iter()
            .map(|row| row.iter().map(|x| x.map_or(f32::NAN, |v| v as f32)).collect())
            .collect()
    }

    /// `[n_rows, n_features]` matrix; short rows are padded with NaN.
    pub fn to_array(&self) -> Array2<f32> {
        let width = self
            .features
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(self.n_features);
        Array2::from_shape_fn((self.features.len(), width), |(r, c)| {
            self.features[r]
                .get(c)
                .copied()
                .flatten()
                .map_or(f32::NAN, |v| v as f32)
        })
    }
}

/// Expected predictions for a test case, loaded from JSON.
///
/// `predictions` holds raw margins and `predictions_transformed` the values
/// after the objective's transformation. Each is either a flat list (one value
/// per row) or a nested list (one list of group values per row).
#[derive(Debug, Clone, Deserialize)]
pub struct TestExpected {
    pub predictions: serde_json::Value,
    #[serde(default)]
    pub predictions_transformed: Option<serde_json::Value>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub n_class: Option<u32>,
}

impl TestExpected {
    /// Margins as one vector of group values per row.
    pub fn margin_rows(&self) -> Result<Vec<Vec<f64>>, serde_json::Error> {
        as_rows(&self.predictions)
    }

    /// Transformed predictions as one vector of group values per row.
    pub fn transformed_rows(&self) -> Result<Option<Vec<Vec<f64>>>, serde_json::Error> {
        self.predictions_transformed.as_ref().map(as_rows).transpose()
    }
}

fn as_rows(value: &serde_json::Value) -> Result<Vec<Vec<f64>>, serde_json::Error> {
    match value.as_array().and_then(|rows| rows.first()) {
        Some(serde_json::Value::Array(_)) => Vec::<Vec<f64>>::deserialize(value),
        _ => Ok(Vec::<f64>::deserialize(value)?
            .into_iter()
            .map(|v| vec![v])
            .collect()),
    }
}

/// Assert that two prediction slices agree within `tolerance`.
///
/// Differences are accepted when below the absolute tolerance or below a
/// relative tolerance of `1e-6`, which covers large magnitudes in `f32`.
#[track_caller]
pub fn assert_slices_approx_eq(actual: &[f32], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let diff = (f64::from(a) - e).abs();
        assert!(
            diff <= tolerance || diff <= e.abs() * 1e-6,
            "{context}[{i}]: got {a}, expected {e}, diff {diff}"
        );
    }
}
