//! Sample accessor trait for tree traversal.
//!
//! [`SampleAccessor`] is the single abstraction the prediction engine uses to
//! read feature values for one sample (row). A feature is either present or
//! missing; there is no sentinel value inside the trait.
//!
//! # Implementations
//!
//! - `[Option<f32>]` / `Vec<Option<f32>>`: sparse rows, `None` marks a missing feature.
//! - `[f32]` / `Vec<f32>` / `[f32; N]`: dense rows, `NaN` marks a missing feature.
//! - `ndarray::ArrayView1<f32>`: dense row views, `NaN` marks a missing feature.
//!
//! Indices past the end of a row are reported as missing for every implementation.
//!
//! # Example
//!
//! ```
//! use xgb_predict::data::SampleAccessor;
//!
//! let sparse = vec![Some(0.5f32), None, Some(2.0)];
//! assert_eq!(sparse.feature(0), Some(0.5));
//! assert_eq!(sparse.feature(1), None);
//! assert_eq!(sparse.feature(7), None);
//!
//! let dense = [0.5f32, f32::NAN];
//! assert_eq!(dense.feature(1), None);
//! ```

use ndarray::ArrayView1;

// ============================================================================
// SampleAccessor Trait
// ============================================================================

/// Access features for a single sample.
pub trait SampleAccessor {
    /// Get the feature value at the given index.
    ///
    /// Returns `None` when the feature is missing or `index` is out of range.
    fn feature(&self, index: usize) -> Option<f32>;
}

#[inline]
fn dense(value: Option<&f32>) -> Option<f32> {
    value.copied().filter(|v| !v.is_nan())
}

impl SampleAccessor for [Option<f32>] {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        self.get(index).copied().flatten()
    }
}

impl SampleAccessor for Vec<Option<f32>> {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        self.as_slice().feature(index)
    }
}

impl<const N: usize> SampleAccessor for [Option<f32>; N] {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        self.as_slice().feature(index)
    }
}

impl SampleAccessor for [f32] {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        dense(self.get(index))
    }
}

impl SampleAccessor for Vec<f32> {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        dense(self.get(index))
    }
}

// Enables `&[0.5f32, 1.0]` syntax
impl<const N: usize> SampleAccessor for [f32; N] {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        dense(self.get(index))
    }
}

// May be contiguous or strided
impl SampleAccessor for ArrayView1<'_, f32> {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        dense(self.get(index))
    }
}

impl<T: SampleAccessor + ?Sized> SampleAccessor for &T {
    #[inline]
    fn feature(&self, index: usize) -> Option<f32> {
        (**self).feature(index)
    }
}
