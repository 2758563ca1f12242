//! Trie backend.
//!
//! - **node**: `PartialTrie`, the accept-everywhere prefix tree and its merge
//! - **builder**: window partitioning and parallel construction of the root trie

pub mod builder;
pub mod node;

pub use builder::{chunk_size, partition, SearchWindow, WindowedTrieBuilder, WorkerContext};
pub use node::PartialTrie;
