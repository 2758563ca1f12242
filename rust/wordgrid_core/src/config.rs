//! Index options and their JSON form.
//!
//! Every field has a default, so `{}` is a complete config:
//!
//! ```json
//! {"use_trie": true, "multiprocess": true, "window_size": 500, "max_word_length": 24}
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WordSearchError};

/// Default side of a search window, in cells (or axes for the scan backend).
pub const DEFAULT_WINDOW_SIZE: usize = 500;

/// Default cap on the length of substrings stored in the trie.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 24;

/// How a `WordIndex` is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexOptions {
    /// Back the index with the windowed trie instead of the axis scan.
    pub use_trie: bool,
    /// Scan axes on the worker pool instead of the calling thread.
    /// Ignored by the trie backend, whose construction is always parallel.
    pub multiprocess: bool,
    pub window_size: usize,
    pub max_word_length: usize,
    /// Worker pool size; `None` uses one worker per available core.
    pub workers: Option<usize>,
    /// Bound the membership cache to this many words (LRU). `None` never evicts.
    pub cache_capacity: Option<usize>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            use_trie: false,
            multiprocess: false,
            window_size: DEFAULT_WINDOW_SIZE,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            workers: None,
            cache_capacity: None,
        }
    }
}

impl IndexOptions {
    /// Reject sizes that would leave no work per window or no pool to run it.
    pub fn validate(&self) -> Result<()> {
        require_positive("window_size", self.window_size)?;
        require_positive("max_word_length", self.max_word_length)?;
        if let Some(workers) = self.workers {
            require_positive("workers", workers)?;
        }
        if let Some(capacity) = self.cache_capacity {
            require_positive("cache_capacity", capacity)?;
        }
        Ok(())
    }

    pub(crate) fn cache_bound(&self) -> Option<NonZeroUsize> {
        self.cache_capacity.and_then(NonZeroUsize::new)
    }
}

/// `value` as a `NonZeroUsize`, or `InvalidOptions` naming the setting.
pub(crate) fn require_positive(name: &str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value)
        .ok_or_else(|| WordSearchError::InvalidOptions(format!("{name} must be at least 1")))
}

/// Parse index options from a JSON string.
pub fn parse_index_options(json: &str) -> Result<IndexOptions> {
    let options: IndexOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
}

/// Read and parse index options from a JSON file.
pub fn load_index_options(path: impl AsRef<Path>) -> Result<IndexOptions> {
    let json = std::fs::read_to_string(path)?;
    parse_index_options(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let options = parse_index_options("{}").unwrap();
        assert_eq!(options, IndexOptions::default());
        assert!(!options.use_trie);
        assert!(!options.multiprocess);
        assert_eq!(options.window_size, 500);
        assert_eq!(options.max_word_length, 24);
    }

    #[test]
    fn parse_trie_options() {
        let json = r#"{"use_trie":true,"window_size":100,"max_word_length":12,"workers":4}"#;
        let options = parse_index_options(json).unwrap();
        assert!(options.use_trie);
        assert_eq!(options.window_size, 100);
        assert_eq!(options.max_word_length, 12);
        assert_eq!(options.workers, Some(4));
        assert_eq!(options.cache_capacity, None);
    }

    #[test]
    fn zero_window_rejected() {
        let err = parse_index_options(r#"{"window_size":0}"#).unwrap_err();
        assert!(matches!(err, WordSearchError::InvalidOptions(_)));
    }

    #[test]
    fn zero_size_error_names_setting() {
        let options = IndexOptions {
            max_word_length: 0,
            ..IndexOptions::default()
        };
        match options.validate() {
            Err(WordSearchError::InvalidOptions(message)) => {
                assert_eq!(message, "max_word_length must be at least 1")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn zero_cache_capacity_rejected() {
        let options = IndexOptions {
            cache_capacity: Some(0),
            ..IndexOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let err = parse_index_options(r#"{"diagonal":true}"#).unwrap_err();
        assert!(matches!(err, WordSearchError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{"multiprocess":true,"cache_capacity":64}"#).unwrap();
        let options = load_index_options(&path).unwrap();
        assert!(options.multiprocess);
        assert_eq!(options.cache_capacity, Some(64));
    }
}
