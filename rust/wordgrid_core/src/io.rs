//! Grid, word-list and fixture readers.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read a grid file into one flat string.
///
/// Every byte that is not a lowercase ASCII letter (newlines, spaces, digits,
/// uppercase) is dropped, so a grid file may be laid out one row per line.
pub fn read_grid(path: impl AsRef<Path>) -> Result<String> {
    let raw = fs::read(path)?;
    Ok(strip_grid(&raw))
}

/// Keep only the letters `a`..=`z` of `raw`.
pub fn strip_grid(raw: &[u8]) -> String {
    raw.iter()
        .filter(|b| b.is_ascii_lowercase())
        .map(|&b| b as char)
        .collect()
}

/// Read one word per line, trimmed.
///
/// Blank lines are skipped rather than read as the empty word, which every
/// index reports present.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read a JSON fixture mapping each word to whether it is in the grid.
pub fn read_word_map(path: impl AsRef<Path>) -> Result<BTreeMap<String, bool>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
