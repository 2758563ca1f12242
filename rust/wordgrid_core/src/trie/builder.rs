//! Windowed parallel construction of the grid trie.
//!
//! The grid is cut into square windows. Each worker scans one window: for
//! every cell it owns, it inserts the rightward row run and the downward
//! column run (each capped at `max_word_length`) into a window-local trie.
//! The local tries are then merged; merge is a commutative, associative
//! union, so windows can finish in any order.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPool;

use super::node::PartialTrie;
use crate::config::require_positive;
use crate::error::Result;
use crate::grid::SharedGridBuffer;

/// Windows handed out per worker dispatch, relative to the pool size.
const CHUNKS_PER_WORKER: usize = 4;

/// A block of cells owned by one window scan.
///
/// `x` is the first row, `y` the first column. Edge windows are clipped, so
/// `rows`/`columns` may be smaller than the configured window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchWindow {
    pub x: usize,
    pub y: usize,
    pub rows: usize,
    pub columns: usize,
}

impl SearchWindow {
    /// Cells owned by this window, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x, y, columns) = (self.x, self.y, self.columns);
        (x..x + self.rows).flat_map(move |i| (y..y + columns).map(move |j| (i, j)))
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Tile an `axis_length × axis_length` grid with windows of `window_size`.
///
/// Every cell belongs to exactly one window. A zero `window_size` fails with
/// `InvalidOptions`.
pub fn partition(axis_length: usize, window_size: usize) -> Result<Vec<SearchWindow>> {
    Ok(tile(axis_length, require_positive("window_size", window_size)?))
}

fn tile(axis_length: usize, window_size: NonZeroUsize) -> Vec<SearchWindow> {
    let window_size = window_size.get();
    let starts: Vec<usize> = (0..axis_length).step_by(window_size).collect();
    let extent = |start: usize| window_size.min(axis_length - start);
    starts
        .iter()
        .flat_map(|&x| {
            starts.iter().map(move |&y| SearchWindow {
                x,
                y,
                rows: extent(x),
                columns: extent(y),
            })
        })
        .collect()
}

/// Windows per dispatch: `ceil(window_count / (workers * 4))`, at least 1.
pub fn chunk_size(window_count: usize, workers: usize) -> usize {
    window_count
        .div_ceil(workers.max(1) * CHUNKS_PER_WORKER)
        .max(1)
}

/// Everything a window scan reads. Shared immutably by all workers.
#[derive(Debug, Clone)]
pub struct WorkerContext {
    grid: SharedGridBuffer,
    max_word_length: usize,
}

impl WorkerContext {
    pub fn new(grid: SharedGridBuffer, max_word_length: usize) -> Result<Self> {
        let max_word_length = require_positive("max_word_length", max_word_length)?;
        Ok(Self::with_cap(grid, max_word_length))
    }

    fn with_cap(grid: SharedGridBuffer, max_word_length: NonZeroUsize) -> Self {
        WorkerContext {
            grid,
            max_word_length: max_word_length.get(),
        }
    }

    pub fn grid(&self) -> &SharedGridBuffer {
        &self.grid
    }

    /// Build the trie of every row and column run starting in `window`.
    ///
    /// Runs may extend past the window edge into cells owned by neighbours;
    /// the grid is read-only, so that overlap is harmless.
    pub fn scan_window(&self, window: &SearchWindow) -> PartialTrie {
        let mut trie = PartialTrie::new();
        let mut column_run = Vec::with_capacity(self.max_word_length);
        for (i, j) in window.cells() {
            trie.insert_letters(self.grid.row_run(i, j, self.max_word_length));
            self.grid
                .column_run_into(i, j, self.max_word_length, &mut column_run);
            trie.insert_letters(&column_run);
        }
        trie
    }
}

/// Builds the root trie for a grid on a fixed worker pool.
#[derive(Debug, Clone)]
pub struct WindowedTrieBuilder {
    window_size: NonZeroUsize,
    max_word_length: NonZeroUsize,
    pool: Arc<ThreadPool>,
}

impl WindowedTrieBuilder {
    /// Fails with `InvalidOptions` if either size is zero.
    pub fn new(
        window_size: usize,
        max_word_length: usize,
        pool: Arc<ThreadPool>,
    ) -> Result<Self> {
        Ok(WindowedTrieBuilder {
            window_size: require_positive("window_size", window_size)?,
            max_word_length: require_positive("max_word_length", max_word_length)?,
            pool,
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Build with the default chunking policy.
    pub fn build(&self, grid: &SharedGridBuffer) -> PartialTrie {
        let windows = tile(grid.axis_length(), self.window_size);
        let chunk = chunk_size(windows.len(), self.workers());
        self.build_windows(grid, &windows, chunk)
    }

    /// Build with an explicit number of windows per dispatch.
    ///
    /// Any positive chunk size yields the same trie; zero fails with
    /// `InvalidOptions`.
    pub fn build_with_chunk_size(
        &self,
        grid: &SharedGridBuffer,
        chunk: usize,
    ) -> Result<PartialTrie> {
        let chunk = require_positive("chunk", chunk)?;
        let windows = tile(grid.axis_length(), self.window_size);
        Ok(self.build_windows(grid, &windows, chunk.get()))
    }

    fn build_windows(
        &self,
        grid: &SharedGridBuffer,
        windows: &[SearchWindow],
        chunk: usize,
    ) -> PartialTrie {
        let started = Instant::now();
        let context = WorkerContext::with_cap(grid.clone(), self.max_word_length);
        tracing::debug!(
            axis_length = grid.axis_length(),
            windows = windows.len(),
            chunk,
            workers = self.workers(),
            "scanning grid windows"
        );

        let root = self.pool.install(|| {
            windows
                .par_chunks(chunk)
                .map(|batch| {
                    batch
                        .iter()
                        .map(|window| context.scan_window(window))
                        .fold(PartialTrie::new(), PartialTrie::merge)
                })
                .reduce(PartialTrie::new, PartialTrie::merge)
        });

        tracing::info!(
            windows = windows.len(),
            nodes = root.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "trie built"
        );
        root
    }
}
