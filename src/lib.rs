//! # spelldict
//!
//! In-memory word lists for spell checking. A dictionary is loaded once from a
//! whitespace-separated word-list file, queried any number of times with
//! case-insensitive membership checks, and then unloaded.
//!
//! Three interchangeable implementations share the [`Dictionary`] contract:
//!
//! - [`HashDictionary`]: a fixed array of buckets chained as singly linked lists,
//!   selected by a djb2 hash of the lowercased word
//! - [`PointerTrie`]: a 27-way trie (26 letters and the apostrophe) with every
//!   node boxed separately and freed by a post-order walk
//! - [`ArenaTrie`]: the same trie with all nodes in one block reserved up front,
//!   linked by index and freed in a single deallocation (requires the `arena`
//!   feature, enabled by default)
//!
//! ## Quick Start
//!
//! ```
//! use spelldict::{Dictionary, Kind};
//!
//! let mut dict = "trie".parse::<Kind>().unwrap().build();
//! dict.load_reader(&mut "apple\nBanana\ncan't\nzoo\nAPPLE\n".as_bytes()).unwrap();
//!
//! assert_eq!(dict.size(), 5);
//! assert!(dict.check("BANANA"));
//! assert!(!dict.check("cant"));
//!
//! dict.unload();
//! assert!(!dict.check("apple"));
//! ```
//!
//! Loading from a file:
//!
//! ```no_run
//! use std::path::Path;
//! use spelldict::{Dictionary, HashDictionary};
//!
//! let mut dict = HashDictionary::default();
//! dict.load(Path::new("dictionaries/large")).unwrap();
//! println!("{} words", dict.size());
//! ```

#![warn(missing_docs)]

/// Dictionary implementations and the contract they share.
pub mod dictionary;

#[cfg(feature = "arena")]
pub use dictionary::arena_trie::DEFAULT_ARENA_CAPACITY;
#[cfg(feature = "arena")]
pub use dictionary::ArenaTrie;
pub use dictionary::hash_table::DEFAULT_BUCKETS;
pub use dictionary::slot::ALPHABET_SIZE;
pub use dictionary::{
    Dictionary, HashDictionary, Kind, LoadError, PointerTrie, UnknownKind, MAX_WORD_LENGTH,
};
