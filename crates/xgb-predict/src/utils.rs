//! Parallelism helpers shared by the batch prediction paths.

use std::num::NonZeroUsize;

use rayon::prelude::*;

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether parallel execution is allowed.
///
/// When `Parallel`, batch prediction fans rows out over `rayon`. When
/// `Sequential`, rows are evaluated in order on the calling thread.
/// Results are identical either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    #[default]
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if rayon pool has multiple threads, sequential otherwise)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }

    #[inline]
    pub fn maybe_par_bridge_for_each<T, I, F>(self, iter: I, f: F)
    where
        T: Send,
        I: Iterator<Item = T> + Send,
        F: Fn(T) + Sync + Send,
    {
        if self.is_parallel() {
            iter.par_bridge().for_each(f);
        } else {
            iter.for_each(f);
        }
    }
}

// =============================================================================
// Thread Pool Setup
// =============================================================================

/// Run a closure under the requested parallelism.
///
/// With `Parallel` and an explicit `n_threads`, a dedicated pool of that size
/// is installed for the duration of the call. Without `n_threads` the global
/// rayon pool is used. If a dedicated pool cannot be built the global pool is
/// used instead.
pub fn run_with_threads<T: Send>(
    parallelism: Parallelism,
    n_threads: Option<NonZeroUsize>,
    f: impl FnOnce(Parallelism) -> T + Send,
) -> T {
    let parallelism = match n_threads {
        Some(n) if parallelism.is_parallel() => Parallelism::from_threads(n.get()),
        _ => parallelism,
    };

    match (parallelism, n_threads) {
        (Parallelism::Parallel, Some(n)) => {
            match rayon::ThreadPoolBuilder::new().num_threads(n.get()).build() {
                Ok(pool) => pool.install(|| f(Parallelism::Parallel)),
                Err(error) => {
                    tracing::warn!(%error, n_threads = n.get(), "falling back to the global rayon pool");
                    f(Parallelism::Parallel)
                }
            }
        }
        (parallelism, _) => f(parallelism),
    }
}
