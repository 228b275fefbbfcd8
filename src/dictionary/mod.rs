//! Dictionary implementations sharing the load/check/size/unload contract.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

/// Fixed-capacity node storage addressed by integer handles.
#[cfg(feature = "arena")]
pub(crate) mod node_arena;
/// Trie whose nodes all live in one pre-sized block.
#[cfg(feature = "arena")]
pub mod arena_trie;
/// Errors reported while loading a word list.
pub mod error;
/// Hash table of chained word entries.
pub mod hash_table;
/// Trie with individually boxed nodes.
pub mod pointer_trie;
/// Mapping from word bytes to trie child slots.
pub(crate) mod slot;
/// Whitespace tokenizer for word-list files.
pub(crate) mod word_list;

#[cfg(feature = "arena")]
pub use arena_trie::ArenaTrie;
pub use error::LoadError;
pub use hash_table::HashDictionary;
pub use pointer_trie::PointerTrie;

/// Longest word accepted from a word list.
pub const MAX_WORD_LENGTH: usize = 45;

/// The build-then-query contract every dictionary implements.
///
/// A dictionary is empty until loaded, answers [`check`](Dictionary::check)
/// queries without mutation, and releases all of its memory on
/// [`unload`](Dictionary::unload). Loading always starts from an empty
/// structure, so calling `load` twice never leaks the first word list.
pub trait Dictionary {
    /// Loads every whitespace-delimited word from `reader`.
    ///
    /// Any existing contents are released first and the word count restarts
    /// at zero. On error the partially built structure is released as well,
    /// leaving the dictionary empty with a count of zero.
    fn load_reader(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError>;

    /// Returns true if `word` is in the dictionary.
    fn check(&self, word: &str) -> bool;

    /// Returns the number of words read by the last load, counting duplicates.
    ///
    /// Only a load that reaches an open word list changes the count;
    /// [`unload`](Dictionary::unload) and a failed open leave it as it was.
    fn size(&self) -> usize;

    /// Releases all loaded words. Safe to call any number of times.
    ///
    /// The count reported by [`size`](Dictionary::size) is kept.
    fn unload(&mut self) -> bool;

    /// Loads a word-list file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Open`] if the file cannot be opened, in which case
    /// the previous words are released but `size` is unchanged, or whatever
    /// [`load_reader`](Dictionary::load_reader) reports while reading it.
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        self.unload();
        debug!(path = %path.display(), "opening word list");
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(&mut BufReader::new(file))
    }
}

/// Selects one of the dictionary implementations at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// [`HashDictionary`]
    Hash,
    /// [`PointerTrie`]
    PointerTrie,
    /// [`ArenaTrie`]
    #[cfg(feature = "arena")]
    ArenaTrie,
}

impl Kind {
    /// Builds an empty dictionary of this kind with default settings.
    pub fn build(self) -> Box<dyn Dictionary> {
        match self {
            Kind::Hash => Box::new(HashDictionary::default()),
            Kind::PointerTrie => Box::new(PointerTrie::default()),
            #[cfg(feature = "arena")]
            Kind::ArenaTrie => Box::new(ArenaTrie::default()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Hash => "hash",
            Kind::PointerTrie => "trie",
            #[cfg(feature = "arena")]
            Kind::ArenaTrie => "arena",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown [`Kind`] name.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown dictionary kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(Kind::Hash),
            "trie" | "pointer" => Ok(Kind::PointerTrie),
            #[cfg(feature = "arena")]
            "arena" => Ok(Kind::ArenaTrie),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
