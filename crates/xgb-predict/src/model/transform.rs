//! Output transformation for inference.
//!
//! The [`Transformation`] enum defines how raw model outputs (margins) are
//! converted to final predictions. It is derived from the training objective
//! once, at load time, and stored on the model.
//!
//! # Variants
//!
//! - [`Identity`](Transformation::Identity): No transformation (regression, raw margins)
//! - [`Sigmoid`](Transformation::Sigmoid): Logistic sigmoid for binary classification
//! - [`Softmax`](Transformation::Softmax): Softmax for multiclass classification
//!
//! The same primitive serves every prediction form: it is applied across the
//! output groups of one sample, or across the samples of a single-group batch.
//! The axis is the caller's choice.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inference-time output transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transformation {
    /// No transformation; output = margin.
    #[default]
    Identity,

    /// Logistic sigmoid: output = 1 / (1 + exp(-margin)).
    Sigmoid,

    /// Softmax: output_i = exp(margin_i) / sum(exp(margin_j)).
    Softmax,
}

impl Transformation {
    /// Apply the transformation in place. Empty input is a no-op.
    #[inline]
    pub fn apply(self, scores: &mut [f32]) {
        if scores.is_empty() {
            return;
        }

        match self {
            Transformation::Identity => {}
            Transformation::Sigmoid => sigmoid_inplace(scores),
            Transformation::Softmax => softmax_inplace(scores),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Identity => write!(f, "identity"),
            Transformation::Sigmoid => write!(f, "sigmoid"),
            Transformation::Softmax => write!(f, "softmax"),
        }
    }
}

/// Transform a score vector in place according to `kind`.
///
/// Free-function form of [`Transformation::apply`]; needs no model.
#[inline]
pub fn transform(scores: &mut [f32], kind: Transformation) {
    kind.apply(scores);
}

#[inline]
fn sigmoid_inplace(scores: &mut [f32]) {
    for x in scores.iter_mut() {
        *x = 1.0 / (1.0 + (-*x).exp());
    }
}

/// Softmax with the maximum subtracted before exponentiating.
///
/// The running maximum starts at the lowest finite `f32`, and the normaliser
/// is accumulated and applied in `f64`.
#[inline]
fn softmax_inplace(scores: &mut [f32]) {
    let max = scores.iter().copied().fold(f32::MIN, f32::max);

    let mut sum = 0.0f64;
    for x in scores.iter_mut() {
        *x = (*x - max).exp();
        sum += f64::from(*x);
    }

    for x in scores.iter_mut() {
        *x = (f64::from(*x) / sum) as f32;
    }
}
