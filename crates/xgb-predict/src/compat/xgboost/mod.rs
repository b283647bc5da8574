//! XGBoost JSON model format support.
//!
//! This module extracts the fields needed for inference from an XGBoost JSON
//! document and converts them into a validated [`Model`](crate::Model).
//! Only the `gbtree` layout is understood: per-tree parallel node arrays under
//! `learner.gradient_booster.model.trees` and group ids in `tree_info`.

mod convert;
mod error;
mod json;

pub use error::{GroupError, LoadError};
pub use json::{XgbModel, XgbTree};
