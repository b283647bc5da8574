//! Tree-ensemble prediction for [`Model`].

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::data::SampleAccessor;
use crate::model::Model;
use crate::utils::run_with_threads;

use super::PredictOptions;

/// Rows evaluated together per parallel work item in [`Model::predict_matrix`].
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Error type for prediction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// Batch prediction over samples needs a single-output model.
    #[error("batch prediction requires exactly one output group, model has {n_groups}")]
    IncompatibleModelSize { n_groups: usize },
}

impl Model {
    /// Raw margins for one sample, one per output group, written into `out`.
    #[inline]
    fn margins_into<S: SampleAccessor + ?Sized>(&self, sample: &S, out: &mut [f32]) {
        let base_score = self.base_score();
        for (score, predictor) in out.iter_mut().zip(self.predictors()) {
            *score = predictor.sum(sample) + base_score;
        }
    }

    /// Predict one sample.
    ///
    /// Returns one value per output group. Each is the sum of the group's
    /// tree outputs plus the base score; unless `output_margin` is set, the
    /// model's transformation is then applied across the groups (softmax over
    /// classes, sigmoid for binary models).
    pub fn predict<S: SampleAccessor + ?Sized>(&self, sample: &S, output_margin: bool) -> Vec<f32> {
        let mut scores = vec![0.0; self.n_groups()];
        self.margins_into(sample, &mut scores);
        if !output_margin {
            self.transformation().apply(&mut scores);
        }
        scores
    }

    /// Predict a batch of samples against a single-output model.
    ///
    /// Returns one value per sample. Unless `output_margin` is set, the
    /// model's transformation is applied across the whole batch vector.
    ///
    /// # Errors
    ///
    /// [`PredictError::IncompatibleModelSize`] when the model does not have
    /// exactly one output group.
    pub fn predict_batch<S: SampleAccessor + Sync>(
        &self,
        samples: &[S],
        output_margin: bool,
    ) -> Result<Vec<f32>, PredictError> {
        let options = PredictOptions::builder().output_margin(output_margin).build();
        self.predict_batch_with(samples, &options)
    }

    /// [`predict_batch`](Self::predict_batch) with explicit options.
    ///
    /// Parallel evaluation is order-preserving and gives the same values as
    /// sequential evaluation.
    pub fn predict_batch_with<S: SampleAccessor + Sync>(
        &self,
        samples: &[S],
        options: &PredictOptions,
    ) -> Result<Vec<f32>, PredictError> {
        let [predictor] = self.predictors() else {
            return Err(PredictError::IncompatibleModelSize {
                n_groups: self.n_groups(),
            });
        };
        let base_score = self.base_score();

        let mut scores = run_with_threads(options.parallelism, options.n_threads, |parallelism| {
            parallelism.maybe_par_map(samples, |sample| predictor.sum(sample) + base_score)
        });

        tracing::trace!(n_samples = samples.len(), parallelism = ?options.parallelism, "predicted batch");

        if !options.output_margin {
            self.transformation().apply(&mut scores);
        }
        Ok(scores)
    }

    /// Predict every row of a dense feature matrix.
    ///
    /// `features` is `[n_rows, n_features]` with NaN marking missing values.
    /// The output is `[n_rows, n_groups]`; each row equals
    /// [`predict`](Self::predict) on the same input row, so any group count
    /// is accepted.
    pub fn predict_matrix(&self, features: ArrayView2<'_, f32>, options: &PredictOptions) -> Array2<f32> {
        let mut output = Array2::<f32>::zeros((features.nrows(), self.n_groups()));
        if features.nrows() == 0 || self.n_groups() == 0 {
            return output;
        }

        run_with_threads(options.parallelism, options.n_threads, |parallelism| {
            let feature_chunks = features.axis_chunks_iter(Axis(0), DEFAULT_BLOCK_SIZE);
            let output_chunks = output.axis_chunks_iter_mut(Axis(0), DEFAULT_BLOCK_SIZE);

            parallelism.maybe_par_bridge_for_each(
                feature_chunks.zip(output_chunks),
                |(feature_chunk, mut output_chunk)| {
                    let mut scores = vec![0.0f32; self.n_groups()];
                    for (row, mut out) in feature_chunk.outer_iter().zip(output_chunk.outer_iter_mut()) {
                        self.margins_into(&row, &mut scores);
                        if !options.output_margin {
                            self.transformation().apply(&mut scores);
                        }
                        out.assign(&ArrayView1::from(scores.as_slice()));
                    }
                },
            );
        });

        output
    }
}
