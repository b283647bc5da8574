//! Test case loading utilities for integration tests.
//!
//! For assertion helpers, use `xgb_predict::testing`.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

#[allow(unused_imports)]
pub use xgb_predict::testing::{assert_slices_approx_eq, TestExpected, TestInput, DEFAULT_TOLERANCE};

use xgb_predict::Model;

// =============================================================================
// Test Case Loading
// =============================================================================

/// Base directory for test cases.
pub fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-cases")
}

/// Directory for XGBoost gbtree test cases.
pub fn gbtree_dir() -> PathBuf {
    test_cases_dir().join("xgboost/gbtree")
}

/// Path of the model file for a gbtree case.
pub fn gbtree_model_path(name: &str) -> PathBuf {
    gbtree_dir().join(format!("{name}.model.json"))
}

/// Load a JSON file and deserialize it.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> T {
    let file =
        File::open(path).unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    serde_json::from_reader(file)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// The raw JSON document of a gbtree case's model, for mutation in tests.
pub fn gbtree_model_value(name: &str) -> Value {
    load_json(&gbtree_model_path(name))
}

/// A loaded model with its reference inputs and outputs.
pub struct TestCase {
    pub model: Model,
    pub input: TestInput,
    pub expected: TestExpected,
}

/// Load `{name}.model.json`, `{name}.input.json` and `{name}.expected.json`.
pub fn load_gbtree(name: &str) -> TestCase {
    let dir = gbtree_dir();
    let model = Model::load(gbtree_model_path(name))
        .unwrap_or_else(|e| panic!("Failed to load model {name}: {e}"));
    let input = load_json(&dir.join(format!("{name}.input.json")));
    let expected = load_json(&dir.join(format!("{name}.expected.json")));
    TestCase {
        model,
        input,
        expected,
    }
}
