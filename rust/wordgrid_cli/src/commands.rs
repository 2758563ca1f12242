//! Subcommand handlers.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordgrid_core::axis::AxisScanIndex;
use wordgrid_core::config::load_index_options;
use wordgrid_core::generate::{sample_words, write_grid, write_words};
use wordgrid_core::grid::square_axis_length;
use wordgrid_core::io::{read_grid, read_word_map, read_words};
use wordgrid_core::{IndexOptions, WordIndex};

use crate::IndexArgs;

/// Index options from the config file (if any) with flags layered on top.
pub fn resolve_options(args: &IndexArgs) -> anyhow::Result<IndexOptions> {
    let mut options = match &args.config {
        Some(path) => load_index_options(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => IndexOptions::default(),
    };

    options.use_trie |= args.trie;
    options.multiprocess |= args.multiprocess;
    if let Some(window_size) = args.window_size {
        options.window_size = window_size;
    }
    if let Some(max_word_length) = args.max_word_length {
        options.max_word_length = max_word_length;
    }
    if args.workers.is_some() {
        options.workers = args.workers;
    }
    if args.cache_capacity.is_some() {
        options.cache_capacity = args.cache_capacity;
    }
    options.validate()?;
    Ok(options)
}

fn grid_axis_length(grid: &str, explicit: Option<usize>) -> anyhow::Result<usize> {
    match explicit.or_else(|| square_axis_length(grid.len())) {
        Some(axis_length) => Ok(axis_length),
        None => bail!(
            "grid has {} letters, which is not a square; pass --axis-length",
            grid.len()
        ),
    }
}

fn load_grid(path: &Path) -> anyhow::Result<String> {
    read_grid(path).with_context(|| format!("failed to read grid {}", path.display()))
}

fn build_index(grid_path: &Path, args: &IndexArgs) -> anyhow::Result<WordIndex> {
    let options = resolve_options(args)?;
    let grid = load_grid(grid_path)?;
    let axis_length = grid_axis_length(&grid, args.axis_length)?;

    info!("Loading grid: {} ({}x{})", grid_path.display(), axis_length, axis_length);
    if options.use_trie {
        info!("Building trie index; this can take a while for large grids");
    }
    let index = WordIndex::new(&grid, axis_length, &options)?;
    info!("Index ready ({} backend)", index.backend_kind());
    Ok(index)
}

pub fn search(grid_path: &Path, words_path: &Path, args: &IndexArgs) -> anyhow::Result<()> {
    let mut index = build_index(grid_path, args)?;
    let words = read_words(words_path)
        .with_context(|| format!("failed to read words {}", words_path.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut found = 0usize;
    for word in &words {
        if index.is_present(word)? {
            found += 1;
            writeln!(out, "found {word}")?;
        }
    }
    out.flush()?;

    let stats = index.cache_stats();
    info!(
        "Searched {} words: {} found, {} cache hits",
        words.len(),
        found,
        stats.hits
    );
    Ok(())
}

pub fn check(grid_path: &Path, fixture_path: &Path, args: &IndexArgs) -> anyhow::Result<()> {
    let mut index = build_index(grid_path, args)?;
    let fixture = read_word_map(fixture_path)
        .with_context(|| format!("failed to read fixture {}", fixture_path.display()))?;

    let mut mismatches = 0usize;
    for (word, &expected) in &fixture {
        let actual = index.is_present(word)?;
        if actual != expected {
            mismatches += 1;
            error!("{word}: expected {expected}, index says {actual}");
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} of {} fixture words disagree with the index", fixture.len());
    }
    info!("All {} fixture words agree with the index", fixture.len());
    Ok(())
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn generate_grid(path: &Path, size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    write_grid(path, size, &mut rng)
        .with_context(|| format!("failed to write grid {}", path.display()))?;
    info!("Wrote {size}x{size} grid to {}", path.display());
    Ok(())
}

pub fn generate_words(
    path: &Path,
    amount: usize,
    grid_path: &Path,
    json: bool,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let grid = load_grid(grid_path)?;
    let axis_length = grid_axis_length(&grid, None)?;
    let index = AxisScanIndex::new(&grid, axis_length, axis_length.max(1))?;

    let mut rng = rng_from(seed);
    let words = sample_words(&index, amount, &mut rng);
    write_words(path, &words, json, &mut rng)
        .with_context(|| format!("failed to write words {}", path.display()))?;
    info!("Wrote {} words to {}", words.len(), path.display());
    Ok(())
}
