//! Loaders for models trained by other libraries.
//!
//! - [`xgboost`]: XGBoost JSON (`gbtree` booster)

pub mod xgboost;
