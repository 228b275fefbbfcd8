use std::fmt;
use std::io::BufRead;

use tracing::{info, trace, warn};

use super::error::LoadError;
use super::slot::{slot, unsupported_char, ALPHABET_SIZE};
use super::word_list::for_each_word;
use super::Dictionary;

/// A trie node owning its children directly.
#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    word: bool,
}

impl Node {
    /// Returns the child for `byte`, or None if there is no such edge or the
    /// byte has no slot.
    #[inline]
    fn get(&self, byte: u8) -> Option<&Node> {
        self.children[slot(byte)?].as_deref()
    }
}

/// A trie where every node is a separate heap allocation owned by its parent.
///
/// Nodes are allocated lazily as words are inserted. Unloading walks the tree
/// and frees it bottom-up.
///
/// # Examples
///
/// ```
/// use spelldict::{Dictionary, PointerTrie};
///
/// let mut trie = PointerTrie::default();
/// trie.load_reader(&mut "cat\ncatalog".as_bytes()).unwrap();
/// assert!(trie.check("Cat"));
/// assert!(!trie.check("cata"));
/// assert_eq!(trie.node_count(), 8);
/// ```
#[derive(Default)]
pub struct PointerTrie {
    root: Option<Box<Node>>,
    count: usize,
    nodes: usize,
}

impl PointerTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of allocated nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn insert(&mut self, word: &str) -> Result<(), LoadError> {
        if let Some(ch) = unsupported_char(word) {
            return Err(LoadError::UnsupportedCharacter {
                word: word.to_string(),
                ch,
            });
        }
        let nodes = &mut self.nodes;
        let mut trav = self.root.get_or_insert_with(|| {
            *nodes += 1;
            Box::default()
        });
        for index in word.bytes().filter_map(slot) {
            trav = trav.children[index].get_or_insert_with(|| {
                *nodes += 1;
                Box::default()
            });
        }
        trav.word = true;
        self.count += 1;
        Ok(())
    }

    fn load_words(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError> {
        self.root = Some(Box::default());
        self.nodes = 1;
        for_each_word(reader, |word| self.insert(word))
    }
}

impl Dictionary for PointerTrie {
    fn load_reader(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError> {
        self.unload();
        self.count = 0;
        match self.load_words(reader) {
            Ok(()) => {
                info!(words = self.count, nodes = self.nodes, "pointer trie loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, loaded = self.count, "pointer trie load failed");
                self.unload();
                self.count = 0;
                Err(e)
            }
        }
    }

    fn check(&self, word: &str) -> bool {
        self.root
            .as_deref()
            .and_then(|root| word.bytes().try_fold(root, |node, byte| node.get(byte)))
            .is_some_and(|node| node.word)
    }

    fn size(&self) -> usize {
        self.count
    }

    fn unload(&mut self) -> bool {
        if let Some(root) = self.root.take() {
            let freed = release(root);
            debug_assert_eq!(freed, self.nodes);
            trace!(nodes = freed, "pointer trie unloaded");
        }
        self.nodes = 0;
        true
    }
}

/// Frees `node` after all of its descendants, returning how many nodes were freed.
fn release(mut node: Box<Node>) -> usize {
    let mut freed = 1;
    for child in node.children.iter_mut() {
        if let Some(child) = child.take() {
            freed += release(child);
        }
    }
    freed
}

impl Drop for PointerTrie {
    fn drop(&mut self) {
        self.unload();
    }
}

impl fmt::Debug for PointerTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTrie")
            .field("size", &self.count)
            .field("nodes", &self.nodes)
            .finish()
    }
}
