//! Immutable tree ensemble model.
//!
//! Access components via [`predictors()`](Model::predictors),
//! [`base_score()`](Model::base_score) and
//! [`transformation()`](Model::transformation). Prediction lives in
//! [`crate::inference`].

use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::compat::xgboost::{LoadError, XgbModel};
use crate::repr::Predictor;

use super::{Objective, Transformation};

/// A loaded gradient-boosted tree ensemble.
///
/// Holds one [`Predictor`] per output group, the base score already mapped
/// into margin space, and the transformation selected by the objective.
/// A `Model` is never mutated after construction and can be shared across
/// threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    predictors: Box<[Predictor]>,
    base_score: f32,
    transformation: Transformation,
    objective: Objective,
}

impl Model {
    /// Assemble a model from its parts.
    ///
    /// `base_score` must already be in margin space; see
    /// [`Objective::base_score_to_margin`]. The transformation is taken from
    /// the objective.
    pub fn from_parts(predictors: Vec<Predictor>, base_score: f32, objective: Objective) -> Self {
        Self {
            predictors: predictors.into_boxed_slice(),
            base_score,
            transformation: objective.transformation(),
            objective,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load an XGBoost JSON model from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::FileUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    /// Load an XGBoost JSON model from a reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_reader(reader).map_err(LoadError::from_json)?;
        Self::from_value(&value)
    }

    /// Load an XGBoost JSON model from bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_slice(bytes).map_err(LoadError::from_json)?;
        Self::from_value(&value)
    }

    /// Build a model from an already parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self, LoadError> {
        XgbModel::from_value(value)?.into_model()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of output groups (classes; 1 for regression and binary models).
    #[inline]
    pub fn n_groups(&self) -> usize {
        self.predictors.len()
    }

    /// Total number of trees across all groups.
    pub fn n_trees(&self) -> usize {
        self.predictors.iter().map(Predictor::n_trees).sum()
    }

    /// Base score in margin space.
    #[inline]
    pub fn base_score(&self) -> f32 {
        self.base_score
    }

    #[inline]
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    #[inline]
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Per-group predictors, in group-id order.
    #[inline]
    pub fn predictors(&self) -> &[Predictor] {
        &self.predictors
    }
}

impl FromStr for Model {
    type Err = LoadError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(json).map_err(LoadError::from_json)?;
        Self::from_value(&value)
    }
}
