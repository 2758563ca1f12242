//! Read-only grid cells shared across worker threads.

use std::sync::Arc;

use super::validate_grid;
use crate::error::Result;

/// Row-major grid cells, one byte per cell.
///
/// Cloning shares the same allocation; workers never copy the grid. The
/// buffer is filled once in `new` and never mutated afterwards, so it is
/// read concurrently without locking.
#[derive(Debug, Clone)]
pub struct SharedGridBuffer {
    cells: Arc<[u8]>,
    axis_length: usize,
}

impl SharedGridBuffer {
    pub fn new(grid: &str, axis_length: usize) -> Result<Self> {
        validate_grid(grid, axis_length)?;
        Ok(SharedGridBuffer {
            cells: Arc::from(grid.as_bytes()),
            axis_length,
        })
    }

    pub fn axis_length(&self) -> usize {
        self.axis_length
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Cell at row `i`, column `j`.
    pub fn cell(&self, i: usize, j: usize) -> u8 {
        self.cells[i * self.axis_length + j]
    }

    /// Rightward run from `(i, j)`: at most `max_len` cells, clipped at the row end.
    pub fn row_run(&self, i: usize, j: usize, max_len: usize) -> &[u8] {
        let start = i * self.axis_length + j;
        let len = max_len.min(self.axis_length - j);
        &self.cells[start..start + len]
    }

    /// Downward run from `(i, j)` written into `out`, clipped at the column end.
    ///
    /// Columns are strided in a row-major buffer, so the run is gathered into
    /// a caller-owned scratch vector that can be reused between cells.
    pub fn column_run_into(&self, i: usize, j: usize, max_len: usize, out: &mut Vec<u8>) {
        out.clear();
        let end = self.axis_length.min(i.saturating_add(max_len));
        out.extend((i..end).map(|row| self.cell(row, j)));
    }
}
