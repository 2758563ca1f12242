//! `WordIndex`, the single entry point for membership queries.
//!
//! Picks a backend from `IndexOptions`, builds it eagerly, and memoises every
//! answer. Callers only see `is_present`; which backend runs behind it is
//! reported by `backend_kind` for logging.

use std::fmt;
use std::num::NonZeroUsize;
use std::time::Instant;

use ahash::AHashMap;
use lru::LruCache;

use crate::axis::AxisScanIndex;
use crate::config::IndexOptions;
use crate::error::Result;
use crate::grid::SharedGridBuffer;
use crate::pool::build_worker_pool;
use crate::trie::{PartialTrie, WindowedTrieBuilder};

/// Which strategy answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    AxisScan,
    ParallelAxisScan,
    Trie,
    Custom,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::AxisScan => write!(f, "axis-scan"),
            BackendKind::ParallelAxisScan => write!(f, "parallel-axis-scan"),
            BackendKind::Trie => write!(f, "trie"),
            BackendKind::Custom => write!(f, "custom"),
        }
    }
}

/// A strategy that decides whether a word occurs in the grid.
pub trait MembershipBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Custom
    }

    fn contains(&self, word: &str) -> Result<bool>;
}

impl MembershipBackend for AxisScanIndex {
    fn kind(&self) -> BackendKind {
        if self.has_pool() {
            BackendKind::ParallelAxisScan
        } else {
            BackendKind::AxisScan
        }
    }

    fn contains(&self, word: &str) -> Result<bool> {
        if self.has_pool() {
            self.parallel_search(word)
        } else {
            Ok(self.linear_search(word))
        }
    }
}

impl MembershipBackend for PartialTrie {
    fn kind(&self) -> BackendKind {
        BackendKind::Trie
    }

    fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.contains_word(word))
    }
}

/// Memoised answers, keyed by the literal word.
enum MembershipCache {
    Unbounded(AHashMap<String, bool>),
    Bounded(LruCache<String, bool>),
}

impl MembershipCache {
    fn new(capacity: Option<NonZeroUsize>) -> Self {
        match capacity {
            Some(capacity) => MembershipCache::Bounded(LruCache::new(capacity)),
            None => MembershipCache::Unbounded(AHashMap::new()),
        }
    }

    fn get(&mut self, word: &str) -> Option<bool> {
        match self {
            MembershipCache::Unbounded(map) => map.get(word).copied(),
            MembershipCache::Bounded(lru) => lru.get(word).copied(),
        }
    }

    fn insert(&mut self, word: String, present: bool) {
        match self {
            MembershipCache::Unbounded(map) => {
                map.insert(word, present);
            }
            MembershipCache::Bounded(lru) => {
                lru.put(word, present);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            MembershipCache::Unbounded(map) => map.len(),
            MembershipCache::Bounded(lru) => lru.len(),
        }
    }
}

/// Cache counters since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Membership index over one grid.
pub struct WordIndex {
    backend: Box<dyn MembershipBackend>,
    cache: MembershipCache,
    hits: u64,
    misses: u64,
}

impl WordIndex {
    /// Validate the grid and build the backend selected by `options`.
    ///
    /// Trie construction scans the whole grid up front and can take a while
    /// on large grids.
    pub fn new(grid: &str, axis_length: usize, options: &IndexOptions) -> Result<Self> {
        options.validate()?;
        let started = Instant::now();

        let backend: Box<dyn MembershipBackend> = if options.use_trie {
            let buffer = SharedGridBuffer::new(grid, axis_length)?;
            let pool = build_worker_pool(options.workers)?;
            let builder =
                WindowedTrieBuilder::new(options.window_size, options.max_word_length, pool)?;
            Box::new(builder.build(&buffer))
        } else {
            let index = AxisScanIndex::new(grid, axis_length, options.window_size)?;
            if options.multiprocess {
                Box::new(index.with_pool(build_worker_pool(options.workers)?))
            } else {
                Box::new(index)
            }
        };

        tracing::info!(
            backend = %backend.kind(),
            axis_length,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "word index ready"
        );
        Ok(Self::with_backend(backend, options))
    }

    /// Wrap an already-built backend. Only the cache settings of `options` apply.
    pub fn with_backend(backend: Box<dyn MembershipBackend>, options: &IndexOptions) -> Self {
        WordIndex {
            backend,
            cache: MembershipCache::new(options.cache_bound()),
            hits: 0,
            misses: 0,
        }
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Whether `word` reads left-to-right in a row or top-to-bottom in a column.
    ///
    /// Answers come from the cache when possible; a miss asks the backend
    /// once and remembers the result.
    pub fn is_present(&mut self, word: &str) -> Result<bool> {
        if let Some(present) = self.cache.get(word) {
            self.hits += 1;
            return Ok(present);
        }
        self.misses += 1;
        let present = self.backend.contains(word)?;
        self.cache.insert(word.to_string(), present);
        Ok(present)
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }
}

impl fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordIndex")
            .field("backend", &self.backend.kind())
            .field("cache", &self.cache_stats())
            .finish()
    }
}
