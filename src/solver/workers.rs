//! Worker pool sizing for parallel scoring
//!
//! Scoring runs on rayon's global pool. The binary sizes it once at startup,
//! leaving one core for the orchestrating thread.

use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::thread;

/// Available parallelism minus one, at least one
#[must_use]
pub fn worker_count() -> usize {
    thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .saturating_sub(1)
        .max(1)
}

/// Size the global rayon pool to `worker_count()`
///
/// Must run before the first parallel call; later calls fail because the
/// global pool can only be built once.
///
/// # Errors
///
/// Returns an error if the global pool was already initialised.
pub fn init_worker_pool() -> Result<usize, ThreadPoolBuildError> {
    let workers = worker_count();
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("scorer-{i}"))
        .build_global()?;
    Ok(workers)
}
