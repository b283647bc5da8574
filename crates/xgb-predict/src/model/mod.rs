//! The loaded model and the objective-driven score transformations.
//!
//! - [`Model`]: immutable tree ensemble with grouped predictors, remapped base score
//!   and output transformation
//! - [`Objective`]: training objective parsed from the model file
//! - [`Transformation`] / [`transform`]: margin-to-prediction mapping
//!
//! # Example
//!
//! ```no_run
//! use xgb_predict::Model;
//!
//! let model = Model::load("model.json")?;
//! let sample = vec![Some(0.5f32), None, Some(2.0)];
//! let probabilities = model.predict(&sample, false);
//! assert_eq!(probabilities.len(), model.n_groups());
//! # Ok::<(), xgb_predict::LoadError>(())
//! ```

mod ensemble;
mod objective;
mod transform;

pub use ensemble::Model;
pub use objective::Objective;
pub use transform::{transform, Transformation};
