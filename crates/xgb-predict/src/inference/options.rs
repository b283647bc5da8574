//! Prediction configuration with builder pattern.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use xgb_predict::{Parallelism, PredictOptions};
//!
//! // All defaults: transformed output, sequential
//! let options = PredictOptions::default();
//! assert!(!options.output_margin);
//!
//! let options = PredictOptions::builder()
//!     .output_margin(true)
//!     .parallelism(Parallelism::Parallel)
//!     .n_threads(NonZeroUsize::new(4).unwrap())
//!     .build();
//! assert_eq!(options.parallelism, Parallelism::Parallel);
//! ```

use std::num::NonZeroUsize;

use bon::Builder;

use crate::utils::Parallelism;

/// Options for the batch prediction entry points.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(derive(Clone, Debug))]
pub struct PredictOptions {
    /// Return raw margins instead of transformed predictions. Default: `false`.
    #[builder(default)]
    pub output_margin: bool,

    /// Whether rows may be evaluated in parallel. Default: `Sequential`.
    #[builder(default)]
    pub parallelism: Parallelism,

    /// Size of a dedicated thread pool. `None` uses the global rayon pool.
    pub n_threads: Option<NonZeroUsize>,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PredictOptions {
    /// Default options that return raw margins.
    pub fn margin() -> Self {
        Self::builder().output_margin(true).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = PredictOptions::default();
        assert!(!options.output_margin);
        assert_eq!(options.parallelism, Parallelism::Sequential);
        assert_eq!(options.n_threads, None);
    }

    #[test]
    fn builder_sets_fields() {
        let options = PredictOptions::builder()
            .parallelism(Parallelism::Parallel)
            .maybe_n_threads(NonZeroUsize::new(3))
            .build();
        assert_eq!(options.parallelism, Parallelism::Parallel);
        assert_eq!(options.n_threads.map(NonZeroUsize::get), Some(3));
        assert!(PredictOptions::margin().output_margin);
    }
}
