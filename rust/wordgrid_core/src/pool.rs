//! Fixed-size worker pool shared by the parallel backends.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// Build a dedicated pool of `workers` threads (`None` = one per core).
///
/// A dedicated pool keeps index work off rayon's global pool, so callers
/// that embed the index alongside their own rayon work get predictable
/// sizing.
pub fn build_worker_pool(workers: Option<usize>) -> Result<Arc<ThreadPool>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.unwrap_or(0))
        .thread_name(|i| format!("wordgrid-worker-{i}"))
        .build()?;
    tracing::debug!(threads = pool.current_num_threads(), "worker pool started");
    Ok(Arc::new(pool))
}
