//! Errors raised while loading an XGBoost model.

use std::io;
use std::path::PathBuf;

use crate::repr::TreeValidationError;

/// Error type for loading an XGBoost JSON model.
///
/// Every failure aborts the load; no partially built model is returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The model file could not be opened or read.
    #[error("cannot read model file {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not well-formed JSON, or its top level is not an object.
    #[error("invalid model: {reason}")]
    InvalidModel {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A required field is absent.
    #[error("missing field `{path}`")]
    MissingField { path: String },

    /// A field is present but holds the wrong JSON type or an unusable value.
    #[error("field `{path}` is not {expected}")]
    MalformedField { path: String, expected: &'static str },

    /// The five per-tree node arrays differ in length.
    #[error(
        "tree {tree} has node arrays of different lengths: default_left {}, left_children {}, right_children {}, split_indices {}, split_conditions {}",
        .lengths[0], .lengths[1], .lengths[2], .lengths[3], .lengths[4]
    )]
    ArrayLengthMismatch { tree: usize, lengths: [usize; 5] },

    /// A tree failed structural validation.
    #[error("tree {tree} is invalid: {source}")]
    InvalidTree {
        tree: usize,
        #[source]
        source: TreeValidationError,
    },

    /// `tree_info` does not assign a usable group to every tree.
    #[error("invalid tree_info: {0}")]
    GroupMismatch(#[from] GroupError),

    /// The base score is outside the domain required by the objective.
    #[error("base score {base_score} is out of range for objective {objective}")]
    InvalidBaseScore { objective: String, base_score: f32 },
}

impl LoadError {
    pub(crate) fn from_json(source: serde_json::Error) -> Self {
        LoadError::InvalidModel {
            reason: source.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn not_an_object() -> Self {
        LoadError::InvalidModel {
            reason: "top-level JSON value is not an object".to_string(),
            source: None,
        }
    }
}

/// Problems with the tree-to-group assignment in `tree_info`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("{len} group ids for {n_trees} trees")]
    LengthMismatch { n_trees: usize, len: usize },

    #[error("tree {tree} has negative group id {group}")]
    NegativeGroup { tree: usize, group: i32 },
}
