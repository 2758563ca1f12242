//! Random grids and word fixtures for tests and benchmarks.
//!
//! Sampled words come in pairs: a slice of a real row or column (present by
//! construction) and a shuffle of the same letters, whose presence is
//! decided by the linear axis scan.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::axis::AxisScanIndex;
use crate::error::Result;

/// Shortest slice length drawn for a sampled word.
const MIN_SAMPLE_LENGTH: usize = 5;
/// Lower bound of the exclusive upper end of the slice-length draw.
const MIN_SAMPLE_SPAN: usize = 12;
/// Cap on the slice-length draw.
const MAX_SAMPLE_SPAN: usize = 24;

/// A random grid of `length²` lowercase letters.
pub fn create_grid<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length * length)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}

/// Lay a flat grid out as `axis_length` newline-terminated lines.
pub fn format_grid(grid: &str, axis_length: usize) -> String {
    if axis_length == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(grid.len() + grid.len() / axis_length);
    for row in grid.as_bytes().chunks(axis_length) {
        out.push_str(&String::from_utf8_lossy(row));
        out.push('\n');
    }
    out
}

/// Write a random grid of side `length` to `path`, one row per line.
pub fn write_grid<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    length: usize,
    rng: &mut R,
) -> Result<String> {
    let grid = create_grid(length, rng);
    std::fs::write(path, format_grid(&grid, length))?;
    Ok(grid)
}

/// Draw `amount` present words and their shuffles from the grid.
///
/// Duplicate draws collapse, so the map may hold fewer than `2 * amount`
/// entries.
pub fn sample_words<R: Rng + ?Sized>(
    index: &AxisScanIndex,
    amount: usize,
    rng: &mut R,
) -> BTreeMap<String, bool> {
    let axes = index.axes();
    let length = axes.axis_length();
    let mut words = BTreeMap::new();
    if length == 0 {
        return words;
    }

    for _ in 0..amount {
        let lines = if rng.gen_bool(0.5) {
            axes.rows()
        } else {
            axes.columns()
        };
        let axis = lines[rng.gen_range(0..length)].as_bytes();
        let start = rng.gen_range(0..length);
        let span = MIN_SAMPLE_SPAN.max(MAX_SAMPLE_SPAN.min(length - start));
        let end = length.min(start + rng.gen_range(MIN_SAMPLE_LENGTH..span));

        let mut letters = axis[start..end].to_vec();
        let present = String::from_utf8_lossy(&letters).into_owned();
        letters.shuffle(rng);
        let shuffled = String::from_utf8_lossy(&letters).into_owned();

        let shuffled_present = index.linear_search(&shuffled);
        words.insert(present, true);
        words.insert(shuffled, shuffled_present);
    }
    words
}

/// Write sampled words either as a JSON fixture or as a plain word list.
///
/// The plain list repeats a third of the words and shuffles the whole list,
/// so consumers see cache hits.
pub fn write_words<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    words: &BTreeMap<String, bool>,
    json: bool,
    rng: &mut R,
) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    if json {
        serde_json::to_writer_pretty(&mut out, words)?;
    } else {
        let mut list: Vec<&str> = words.keys().map(String::as_str).collect();
        let repeats: Vec<&str> = list
            .choose_multiple(rng, list.len() / 3)
            .copied()
            .collect();
        list.extend(repeats);
        list.shuffle(rng);
        for word in list {
            writeln!(out, "{word}")?;
        }
    }
    out.flush()?;
    Ok(())
}
