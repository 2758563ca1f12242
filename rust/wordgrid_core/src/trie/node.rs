//! Prefix tree over lowercase letters with union-merge.
//!
//! Paths can be as long as the longest grid run, so every walk over the tree
//! (merge, count, clone, compare, drop) uses an explicit stack instead of
//! recursion.

use std::fmt;

use crate::error::{Result, WordSearchError};

/// Number of child slots per node: one per letter `a`..=`z`.
const ALPHABET: usize = 26;

/// A prefix tree in which every node accepts.
///
/// There is no end-of-word flag: a sequence is contained when its full path
/// exists, so inserting `"cat"` also makes `"c"` and `"ca"` present. Children
/// live in a fixed array indexed by letter.
///
/// Two tries merge by union, so tries built independently (one per grid
/// window) combine into the trie of all their sequences in any order.
#[derive(Default)]
pub struct PartialTrie {
    children: [Option<Box<PartialTrie>>; ALPHABET],
}

fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

impl PartialTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every prefix of `chars`. An empty sequence is a no-op.
    ///
    /// Fails without modifying the trie if any byte is not a lowercase letter.
    pub fn insert_sequence(&mut self, chars: &[u8]) -> Result<()> {
        if let Some(position) = chars.iter().position(|b| !b.is_ascii_lowercase()) {
            return Err(WordSearchError::InvalidCharacter {
                byte: chars[position],
                position,
            });
        }
        self.insert_letters(chars);
        Ok(())
    }

    /// Insert a sequence already known to hold only lowercase letters.
    ///
    /// Grid cells are validated once when the shared buffer is built, so the
    /// window scan skips the per-insert check.
    pub(crate) fn insert_letters(&mut self, letters: &[u8]) {
        let mut node = self;
        for &byte in letters {
            let index = usize::from(byte - b'a');
            node = node.children[index].get_or_insert_with(Box::default);
        }
    }

    /// Walk `chars` from the root. The empty sequence is always contained.
    pub fn contains(&self, chars: &[u8]) -> bool {
        let mut node = self;
        for &byte in chars {
            match slot(byte).and_then(|index| node.children[index].as_deref()) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.contains(word.as_bytes())
    }

    pub fn child(&self, byte: u8) -> Option<&PartialTrie> {
        slot(byte).and_then(|index| self.children[index].as_deref())
    }

    /// Union `other` into `self`, returning the merged trie.
    pub fn merge(mut self, other: PartialTrie) -> PartialTrie {
        self.merge_from(other);
        self
    }

    /// In-place union. A letter present on both sides queues both subtrees
    /// for merging; a letter present on one side moves over as is.
    pub fn merge_from(&mut self, other: PartialTrie) {
        let mut pending: Vec<(&mut PartialTrie, PartialTrie)> = vec![(self, other)];
        while let Some((target, mut source)) = pending.pop() {
            let incoming = std::mem::take(&mut source.children);
            for (mine, theirs) in target.children.iter_mut().zip(incoming) {
                let Some(theirs) = theirs else { continue };
                match mine {
                    Some(node) => pending.push((&mut **node, *theirs)),
                    None => *mine = Some(theirs),
                }
            }
        }
    }

    /// Number of distinct non-empty sequences stored (non-root nodes).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            for child in node.children() {
                count += 1;
                pending.push(child);
            }
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    fn children(&self) -> impl Iterator<Item = &PartialTrie> {
        self.children.iter().filter_map(|child| child.as_deref())
    }
}

impl Clone for PartialTrie {
    fn clone(&self) -> Self {
        let mut root = PartialTrie::new();
        let mut pending: Vec<(&PartialTrie, &mut PartialTrie)> = vec![(self, &mut root)];
        while let Some((source, target)) = pending.pop() {
            for (theirs, mine) in source.children.iter().zip(target.children.iter_mut()) {
                if let Some(theirs) = theirs {
                    let child = mine.insert(Box::default());
                    pending.push((&**theirs, &mut **child));
                }
            }
        }
        root
    }
}

impl PartialEq for PartialTrie {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            for (a, b) in left.children.iter().zip(&right.children) {
                match (a, b) {
                    (Some(a), Some(b)) => pending.push((&**a, &**b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for PartialTrie {}

impl fmt::Debug for PartialTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialTrie")
            .field("nodes", &self.len())
            .finish()
    }
}

impl Drop for PartialTrie {
    fn drop(&mut self) {
        if self.is_empty() {
            return;
        }
        let mut pending: Vec<Box<PartialTrie>> =
            std::mem::take(&mut self.children).into_iter().flatten().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_iter().flatten());
        }
    }
}
