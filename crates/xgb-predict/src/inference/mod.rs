//! Prediction for loaded models.
//!
//! All entry points are methods on [`Model`](crate::Model):
//!
//! - [`predict`](crate::Model::predict): one sample, one value per output group
//! - [`predict_batch`](crate::Model::predict_batch) /
//!   [`predict_batch_with`](crate::Model::predict_batch_with): many samples
//!   against a single-output model, one value per sample
//! - [`predict_matrix`](crate::Model::predict_matrix): dense `[n_rows, n_features]`
//!   input, `[n_rows, n_groups]` output
//!
//! Samples are read through [`SampleAccessor`](crate::data::SampleAccessor).
//! A feature that is absent, NaN in a dense row, or past the end of the row
//! follows each split's `missing` branch.

mod options;
mod predict;

pub use options::PredictOptions;
pub use predict::{PredictError, DEFAULT_BLOCK_SIZE};
