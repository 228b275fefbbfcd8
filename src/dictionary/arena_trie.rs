use std::fmt;
use std::io::BufRead;

use tracing::{info, trace, warn};

use super::error::LoadError;
use super::node_arena::{NodeArena, NodeId};
use super::slot::{slot, unsupported_char, ALPHABET_SIZE};
use super::word_list::for_each_word;
use super::Dictionary;

/// Node ceiling used by [`ArenaTrie::default`], enough for a 143,091-word
/// English dictionary.
pub const DEFAULT_ARENA_CAPACITY: usize = 367_090;

#[derive(Clone, Copy, Debug, Default)]
struct ArenaNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    word: bool,
}

/// A trie whose nodes live in one block reserved at load time.
///
/// The block holds a fixed number of nodes; a word list that needs more
/// fails with [`LoadError::CapacityExceeded`]. Children are addressed by
/// index, and unloading frees the block in one step without visiting nodes.
///
/// # Examples
///
/// ```
/// use spelldict::{ArenaTrie, Dictionary, LoadError};
///
/// let mut trie = ArenaTrie::with_capacity(8);
/// trie.load_reader(&mut "cat\ncatalog".as_bytes()).unwrap();
/// assert!(trie.check("CATALOG"));
///
/// let err = trie.load_reader(&mut "cat\ncatalogue".as_bytes()).unwrap_err();
/// assert!(matches!(err, LoadError::CapacityExceeded { capacity: 8 }));
/// assert!(!trie.check("cat"));
/// ```
pub struct ArenaTrie {
    arena: Option<NodeArena<ArenaNode>>,
    capacity: usize,
    count: usize,
}

impl ArenaTrie {
    /// Creates an empty trie that will reserve `capacity` nodes when loaded.
    pub fn with_capacity(capacity: usize) -> Self {
        ArenaTrie {
            arena: None,
            capacity,
            count: 0,
        }
    }

    /// Returns the node capacity reserved on load.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of nodes in use, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.as_ref().map_or(0, NodeArena::len)
    }

    fn load_words(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError> {
        let arena = self
            .arena
            .insert(NodeArena::with_root(self.capacity, ArenaNode::default())?);
        let count = &mut self.count;
        for_each_word(reader, |word| {
            insert(arena, word)?;
            *count += 1;
            Ok(())
        })
    }
}

fn insert(arena: &mut NodeArena<ArenaNode>, word: &str) -> Result<(), LoadError> {
    if let Some(ch) = unsupported_char(word) {
        return Err(LoadError::UnsupportedCharacter {
            word: word.to_string(),
            ch,
        });
    }
    let mut trav = NodeId::ROOT;
    for index in word.bytes().filter_map(slot) {
        trav = match arena.get(trav).children[index] {
            Some(child) => child,
            None => {
                let child = arena.alloc(ArenaNode::default())?;
                arena.get_mut(trav).children[index] = Some(child);
                child
            }
        };
    }
    arena.get_mut(trav).word = true;
    Ok(())
}

impl Default for ArenaTrie {
    fn default() -> Self {
        ArenaTrie::with_capacity(DEFAULT_ARENA_CAPACITY)
    }
}

impl Dictionary for ArenaTrie {
    fn load_reader(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError> {
        self.unload();
        self.count = 0;
        match self.load_words(reader) {
            Ok(()) => {
                info!(
                    words = self.count,
                    nodes = self.node_count(),
                    capacity = self.capacity,
                    "arena trie loaded"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, loaded = self.count, "arena trie load failed");
                self.unload();
                self.count = 0;
                Err(e)
            }
        }
    }

    fn check(&self, word: &str) -> bool {
        let Some(arena) = &self.arena else {
            return false;
        };
        word.bytes()
            .try_fold(NodeId::ROOT, |id, byte| arena.get(id).children[slot(byte)?])
            .is_some_and(|id| arena.get(id).word)
    }

    fn size(&self) -> usize {
        self.count
    }

    fn unload(&mut self) -> bool {
        if let Some(arena) = self.arena.take() {
            trace!(nodes = arena.len(), capacity = arena.capacity(), "arena trie unloaded");
        }
        true
    }
}

impl fmt::Debug for ArenaTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaTrie")
            .field("size", &self.count)
            .field("nodes", &self.node_count())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn loaded(capacity: usize, words: &str) -> ArenaTrie {
        let mut trie = ArenaTrie::with_capacity(capacity);
        trie.load_reader(&mut Cursor::new(words)).unwrap();
        trie
    }

    #[test]
    fn unloaded_trie_rejects_everything() {
        let trie = ArenaTrie::with_capacity(16);
        assert!(!trie.check("a"));
        assert!(!trie.check(""));
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn root_is_allocated_for_empty_list() {
        let trie = loaded(1, "");
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.size(), 0);
        assert!(!trie.check(""));
    }

    #[test]
    fn nodes_match_pointer_trie_layout() {
        let trie = loaded(64, "a ab abc b bc");
        assert_eq!(trie.node_count(), 6);
        assert!(trie.check("ab"));
        assert!(trie.check("BC"));
        assert!(!trie.check("abcd"));
        assert!(!trie.check("c"));
    }

    #[test]
    fn exact_capacity_fits() {
        let trie = loaded("abcdef".len() + 1, "abcdef ABC");
        assert_eq!(trie.node_count(), trie.capacity());
        assert!(trie.check("abc"));
    }

    #[test]
    fn one_node_over_capacity_fails() {
        let mut trie = ArenaTrie::with_capacity("abcdef".len() + 1);
        let err = trie
            .load_reader(&mut Cursor::new("abc\nabcdefg"))
            .unwrap_err();
        assert!(matches!(err, LoadError::CapacityExceeded { capacity: 7 }));
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.check("abc"));
    }

    #[test]
    fn zero_capacity_fails_before_reading() {
        let mut trie = ArenaTrie::with_capacity(0);
        let err = trie.load_reader(&mut Cursor::new("a")).unwrap_err();
        assert!(matches!(err, LoadError::CapacityExceeded { capacity: 0 }));
    }

    #[test]
    fn unsupported_character_fails_load() {
        let mut trie = ArenaTrie::with_capacity(64);
        let err = trie.load_reader(&mut Cursor::new("ok\nno.")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedCharacter { ch: '.', .. }));
        assert!(!trie.check("ok"));
    }

    #[test]
    fn characters_without_slot_never_match() {
        let trie = loaded(64, "can't");
        assert!(trie.check("Can't"));
        assert!(!trie.check("can`t"));
        assert!(!trie.check("cañt"));
    }

    #[test]
    fn reload_reuses_capacity() {
        let mut trie = loaded(8, "catalog");
        trie.load_reader(&mut Cursor::new("dogs")).unwrap();
        assert!(!trie.check("catalog"));
        assert!(trie.check("dogs"));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn unload_is_idempotent() {
        let mut trie = loaded(16, "one");
        assert!(trie.unload());
        assert!(trie.unload());
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.check("one"));
    }

    #[test]
    fn node_is_compact() {
        assert!(std::mem::size_of::<ArenaNode>() <= ALPHABET_SIZE * 4 + 4);
    }
}
