//! `wordgrid_core`: membership index over a square grid of letters.
//!
//! Answers "does word W appear left-to-right in some row, or top-to-bottom
//! in some column?" after an up-front indexing phase.
//!
//! Modules:
//! - `grid`     flat grid validation, row/column axes, shared cell buffer
//! - `axis`     axis-scan backend (linear and windowed parallel scan)
//! - `trie`     prefix tree of grid substrings and its windowed parallel builder
//! - `index`    `WordIndex` façade with the membership cache
//! - `config`   `IndexOptions` and JSON loading
//! - `io`       grid, word-list and fixture readers
//! - `pool`     worker pool construction
//! - `generate` random grids and word fixtures
//! - `error`    error types

pub mod axis;
pub mod config;
pub mod error;
pub mod generate;
pub mod grid;
pub mod index;
pub mod io;
pub mod pool;
pub mod trie;

// Re-export key types for convenience.
pub use config::IndexOptions;
pub use error::{Result, WordSearchError};
pub use index::{BackendKind, MembershipBackend, WordIndex};
