//! wordgrid - word search over large square letter grids
//!
//! Loads a grid file, builds a `WordIndex` over it, and reports which words
//! of a word list read left-to-right or top-to-bottom in the grid. Also
//! generates random grids and word fixtures.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(about = "Word search over large square letter grids")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print `found <word>` for every word of the list present in the grid
    Search {
        /// Grid file, one row per line
        #[arg(long, value_name = "GRID")]
        grid: PathBuf,

        /// Word list, one word per line
        #[arg(long, value_name = "WORDS")]
        words: PathBuf,

        #[command(flatten)]
        index: IndexArgs,
    },
    /// Compare the index against a JSON fixture of expected answers
    Check {
        /// Grid file, one row per line
        #[arg(long, value_name = "GRID")]
        grid: PathBuf,

        /// JSON object mapping each word to true/false
        #[arg(long, value_name = "FIXTURE")]
        fixture: PathBuf,

        #[command(flatten)]
        index: IndexArgs,
    },
    /// Generate grids and word lists
    #[command(subcommand)]
    Generate(GenerateCommands),
}

#[derive(Subcommand)]
enum GenerateCommands {
    /// Write a random grid
    Grid {
        /// Where to store the generated grid
        path: PathBuf,

        /// Side length of the grid
        size: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write words sampled from an existing grid
    Words {
        /// Where to store the generated words
        path: PathBuf,

        /// Number of words to draw from the grid
        amount: usize,

        /// Grid to draw the words from
        grid: PathBuf,

        /// Store words with their presence as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Index construction flags shared by `search` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// JSON file with index options; flags below override it
    #[arg(long, env = "WORDGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Side length of the grid (default: inferred from the grid size)
    #[arg(long)]
    pub axis_length: Option<usize>,

    /// Back the index with the windowed trie
    #[arg(long, default_value = "false")]
    pub trie: bool,

    /// Scan rows and columns on the worker pool
    #[arg(long, default_value = "false")]
    pub multiprocess: bool,

    #[arg(long, env = "WORDGRID_WINDOW_SIZE")]
    pub window_size: Option<usize>,

    #[arg(long, env = "WORDGRID_MAX_WORD_LENGTH")]
    pub max_word_length: Option<usize>,

    /// Worker threads (default: one per core)
    #[arg(long, env = "WORDGRID_WORKERS")]
    pub workers: Option<usize>,

    /// Bound the answer cache to this many words
    #[arg(long)]
    pub cache_capacity: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { grid, words, index } => commands::search(&grid, &words, &index),
        Commands::Check {
            grid,
            fixture,
            index,
        } => commands::check(&grid, &fixture, &index),
        Commands::Generate(GenerateCommands::Grid { path, size, seed }) => {
            commands::generate_grid(&path, size, seed)
        }
        Commands::Generate(GenerateCommands::Words {
            path,
            amount,
            grid,
            json,
            seed,
        }) => commands::generate_words(&path, amount, &grid, json, seed),
    }
}
