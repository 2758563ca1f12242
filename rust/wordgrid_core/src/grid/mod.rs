//! Grid validation and axis derivation.
//!
//! A grid arrives as one flat string of `axis_length²` lowercase letters,
//! row-major. `GridAxes` materialises its rows and columns as strings for the
//! axis-scan backend; `SharedGridBuffer` keeps the raw cells for the parallel
//! trie builder.

pub mod shared;

pub use shared::SharedGridBuffer;

use crate::error::{Result, WordSearchError};

/// Check that `grid` is a square of `axis_length` lowercase letters per side.
pub fn validate_grid(grid: &str, axis_length: usize) -> Result<()> {
    let expected = axis_length.checked_mul(axis_length).ok_or_else(|| {
        WordSearchError::InvalidOptions(format!("axis length {axis_length} overflows grid size"))
    })?;
    if grid.len() != expected {
        return Err(WordSearchError::InvalidGridSize {
            axis_length,
            expected,
            actual: grid.len(),
        });
    }
    if let Some(position) = grid.bytes().position(|b| !b.is_ascii_lowercase()) {
        return Err(WordSearchError::InvalidCharacter {
            byte: grid.as_bytes()[position],
            position,
        });
    }
    Ok(())
}

/// Side length of a square grid holding `cells` characters, if there is one.
pub fn square_axis_length(cells: usize) -> Option<usize> {
    let root = (cells as f64).sqrt() as usize;
    // Float sqrt can land one off for large inputs.
    (root.saturating_sub(1)..=root + 1).find(|&n| n.checked_mul(n) == Some(cells))
}

/// Split a validated grid into `axis_length` row strings.
pub fn rows(grid: &str, axis_length: usize) -> Result<Vec<String>> {
    validate_grid(grid, axis_length)?;
    if axis_length == 0 {
        return Ok(Vec::new());
    }
    Ok(grid
        .as_bytes()
        .chunks_exact(axis_length)
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect())
}

/// Transpose rows into columns: column `j` is byte `j` of every row, in row order.
pub fn columns(rows: &[String]) -> Vec<String> {
    let width = rows.first().map_or(0, String::len);
    (0..width)
        .map(|j| {
            rows.iter()
                .filter_map(|row| row.as_bytes().get(j).map(|&b| b as char))
                .collect()
        })
        .collect()
}

/// Rows and columns of a grid, each a string of `axis_length` letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridAxes {
    rows: Vec<String>,
    columns: Vec<String>,
}

impl GridAxes {
    pub fn new(grid: &str, axis_length: usize) -> Result<Self> {
        let rows = rows(grid, axis_length)?;
        let columns = columns(&rows);
        Ok(GridAxes { rows, columns })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn axis_length(&self) -> usize {
        self.rows.len()
    }

    /// Row `i` paired with column `i`, for lockstep scans.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows
            .iter()
            .zip(self.columns.iter())
            .map(|(row, column)| (row.as_str(), column.as_str()))
    }
}
