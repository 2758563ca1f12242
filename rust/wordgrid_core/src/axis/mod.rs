//! Axis-scan backend: membership by substring search over rows and columns.
//!
//! Only forward readings count: left-to-right along a row, top-to-bottom
//! along a column. The linear form scans on the calling thread; the parallel
//! form splits the axis indices into windows of `window_size` and ORs the
//! per-window answers on the worker pool.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::Arc;

use memchr::memmem::Finder;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::config::require_positive;
use crate::error::{Result, WordSearchError};
use crate::grid::GridAxes;

#[derive(Debug)]
pub struct AxisScanIndex {
    axes: GridAxes,
    window_size: NonZeroUsize,
    pool: Option<Arc<ThreadPool>>,
}

impl AxisScanIndex {
    /// Build from a flat grid. The index has no worker pool until
    /// `with_pool` attaches one.
    pub fn new(grid: &str, axis_length: usize, window_size: usize) -> Result<Self> {
        Self::from_axes(GridAxes::new(grid, axis_length)?, window_size)
    }

    /// Fails with `InvalidOptions` if `window_size` is zero.
    pub fn from_axes(axes: GridAxes, window_size: usize) -> Result<Self> {
        Ok(AxisScanIndex {
            axes,
            window_size: require_positive("window_size", window_size)?,
            pool: None,
        })
    }

    /// Attach the pool that `parallel_search` dispatches windows to.
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn has_pool(&self) -> bool {
        self.pool.is_some()
    }

    pub fn axes(&self) -> &GridAxes {
        &self.axes
    }

    pub fn window_size(&self) -> usize {
        self.window_size.get()
    }

    /// Axis-index windows: `[0, w)`, `[w, 2w)`, ..., the last clipped at the axis length.
    pub fn windows(&self) -> Vec<Range<usize>> {
        let n = self.axes.axis_length();
        let size = self.window_size.get();
        (0..n)
            .step_by(size)
            .map(|start| start..n.min(start + size))
            .collect()
    }

    /// Scan row `i` and column `i` together, stopping at the first hit.
    ///
    /// The empty word is vacuously present.
    pub fn linear_search(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }
        let finder = Finder::new(word.as_bytes());
        self.axes
            .pairs()
            .any(|(row, column)| contains(&finder, row) || contains(&finder, column))
    }

    /// Same answer as `linear_search`, computed window by window on the pool.
    ///
    /// Windows may finish in any order; the first positive window stops the
    /// remaining ones.
    pub fn parallel_search(&self, word: &str) -> Result<bool> {
        let pool = self.pool.as_ref().ok_or(WordSearchError::UninitializedWorker)?;
        if word.is_empty() {
            return Ok(true);
        }
        let finder = Finder::new(word.as_bytes());
        let windows = self.windows();
        tracing::trace!(word, windows = windows.len(), "parallel axis scan");
        Ok(pool.install(|| {
            windows
                .into_par_iter()
                .any(|window| self.scan_window(&finder, window))
        }))
    }

    fn scan_window(&self, finder: &Finder<'_>, window: Range<usize>) -> bool {
        let rows = &self.axes.rows()[window.clone()];
        let columns = &self.axes.columns()[window];
        rows.iter().any(|row| contains(finder, row))
            || columns.iter().any(|column| contains(finder, column))
    }
}

fn contains(finder: &Finder<'_>, axis: &str) -> bool {
    finder.find(axis.as_bytes()).is_some()
}
