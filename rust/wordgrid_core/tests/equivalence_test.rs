//! Cross-backend agreement on random grids.

use proptest::prelude::*;
use wordgrid_core::axis::AxisScanIndex;
use wordgrid_core::grid::SharedGridBuffer;
use wordgrid_core::pool::build_worker_pool;
use wordgrid_core::trie::{PartialTrie, WindowedTrieBuilder};
use wordgrid_core::{IndexOptions, WordIndex};

/// A square grid over a small alphabet (so short words hit often) plus its side.
fn grid() -> impl Strategy<Value = (String, usize)> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), n * n)
            .prop_map(move |cells| (cells.into_iter().collect::<String>(), n))
    })
}

fn queries() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{0,9}", 1..24)
}

/// Every forward row/column substring, by brute force.
fn brute_force(grid: &str, n: usize, word: &str) -> bool {
    if word.is_empty() {
        return true;
    }
    let cells = grid.as_bytes();
    let rows = (0..n).map(|i| cells[i * n..(i + 1) * n].to_vec());
    let columns = (0..n).map(|j| (0..n).map(|i| cells[i * n + j]).collect::<Vec<u8>>());
    rows.chain(columns)
        .any(|axis| axis.windows(word.len()).any(|w| w == word.as_bytes()))
}

fn trie_for(grid: &str, n: usize, window_size: usize, max_word_length: usize) -> PartialTrie {
    let buffer = SharedGridBuffer::new(grid, n).unwrap();
    let pool = build_worker_pool(Some(3)).unwrap();
    WindowedTrieBuilder::new(window_size, max_word_length, pool)
        .unwrap()
        .build(&buffer)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_backends_agree((grid, n) in grid(), words in queries(), window_size in 1usize..9) {
        let scan = AxisScanIndex::new(&grid, n, window_size).unwrap();
        let trie = trie_for(&grid, n, window_size, n);
        for word in &words {
            let expected = brute_force(&grid, n, word);
            prop_assert_eq!(scan.linear_search(word), expected, "scan {}", word);
            prop_assert_eq!(trie.contains_word(word), expected, "trie {}", word);
        }
    }

    #[test]
    fn prop_linear_parallel_agree(
        (grid, n) in grid(),
        words in queries(),
        window_size in 1usize..9,
    ) {
        let scan = AxisScanIndex::new(&grid, n, window_size)
            .unwrap()
            .with_pool(build_worker_pool(Some(3)).unwrap());
        for word in &words {
            prop_assert_eq!(scan.parallel_search(word).unwrap(), scan.linear_search(word));
        }
    }

    #[test]
    fn prop_window_size_irrelevant((grid, n) in grid(), a in 1usize..9, b in 1usize..9) {
        prop_assert_eq!(trie_for(&grid, n, a, 24), trie_for(&grid, n, b, 24));
    }

    #[test]
    fn prop_trie_respects_max_word_length(
        (grid, n) in grid(),
        max_len in 1usize..4,
        words in queries(),
    ) {
        let trie = trie_for(&grid, n, 2, max_len);
        for word in &words {
            let expected = word.len() <= max_len && brute_force(&grid, n, word);
            prop_assert_eq!(trie.contains_word(word), expected, "{}", word);
        }
    }

    #[test]
    fn prop_facade_agrees_across_options((grid, n) in grid(), words in queries()) {
        let configs = [
            IndexOptions {
                window_size: 2,
                ..IndexOptions::default()
            },
            IndexOptions {
                multiprocess: true,
                window_size: 3,
                workers: Some(2),
                ..IndexOptions::default()
            },
            IndexOptions {
                use_trie: true,
                window_size: 2,
                workers: Some(2),
                ..IndexOptions::default()
            },
        ];
        let mut indexes: Vec<WordIndex> = configs
            .iter()
            .map(|options| WordIndex::new(&grid, n, options).unwrap())
            .collect();
        for word in &words {
            let expected = brute_force(&grid, n, word);
            for index in indexes.iter_mut() {
                prop_assert_eq!(index.is_present(word).unwrap(), expected);
                // Cached answer matches the first one.
                prop_assert_eq!(index.is_present(word).unwrap(), expected);
            }
        }
    }
}
