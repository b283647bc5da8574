//! xgb-predict: inference for gradient-boosted tree ensembles saved as XGBoost JSON.
//!
//! Loads a `gbtree` model written by XGBoost's `save_model("model.json")`,
//! validates every tree, and evaluates it on feature vectors with XGBoost's
//! missing-value routing, output grouping and objective transformations.
//!
//! # Key Types
//!
//! - [`Model`] - Loaded, immutable ensemble; entry point for prediction
//! - [`PredictOptions`] - Batch prediction configuration (builder)
//! - [`Transformation`] / [`transform`] - Margin-to-prediction mapping
//! - [`SampleAccessor`] - How feature rows are read (sparse, dense, ndarray)
//! - [`LoadError`] / [`PredictError`] - Error types
//!
//! # Example
//!
//! ```
//! use xgb_predict::{Model, Transformation};
//!
//! let json = r#"{
//!   "learner": {
//!     "objective": { "name": "binary:logistic" },
//!     "learner_model_param": { "base_score": "5E-1" },
//!     "gradient_booster": { "model": {
//!       "trees": [{
//!         "default_left": [true, false, false],
//!         "left_children": [1, -1, -1],
//!         "right_children": [2, -1, -1],
//!         "split_indices": [0, 0, 0],
//!         "split_conditions": [0.5, -1.0, 1.0]
//!       }],
//!       "tree_info": [0]
//!     } }
//!   }
//! }"#;
//!
//! let model: Model = json.parse()?;
//! assert_eq!(model.transformation(), Transformation::Sigmoid);
//!
//! let margin = model.predict(&[Some(0.25f32)], true);
//! assert_eq!(margin, vec![-1.0]);
//!
//! // Missing features follow the default direction (left here).
//! let prob = model.predict(&[None::<f32>], false);
//! assert!(prob[0] < 0.5);
//! # Ok::<(), xgb_predict::LoadError>(())
//! ```

pub mod compat;
pub mod data;
pub mod inference;
pub mod model;
pub mod repr;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use compat::xgboost::{GroupError, LoadError};
pub use data::SampleAccessor;
pub use inference::{PredictError, PredictOptions};
pub use model::{transform, Model, Objective, Transformation};
pub use repr::{Node, Predictor, Tree, TreeValidationError};
pub use utils::{run_with_threads, Parallelism};
