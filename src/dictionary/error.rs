use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a word list.
///
/// Whichever variant is returned, the dictionary has already been unloaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The word-list file could not be opened.
    #[error("could not open {}: {source}", .path.display())]
    Open {
        /// Path that was passed to `load`.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Reading from an opened word list failed.
    #[error("failed reading word list: {0}")]
    Read(#[from] io::Error),
    /// Memory for a new entry or node could not be reserved.
    #[error("out of memory while loading dictionary")]
    OutOfMemory,
    /// The arena trie needed more nodes than it was sized for.
    #[error("arena capacity of {capacity} nodes exceeded")]
    CapacityExceeded {
        /// Configured node capacity.
        capacity: usize,
    },
    /// A word is longer than the supported maximum.
    #[error("word `{word}` is longer than {max} characters")]
    WordTooLong {
        /// The offending word.
        word: String,
        /// Maximum accepted length.
        max: usize,
    },
    /// A word contains a character that has no trie slot.
    #[error("word `{word}` contains unsupported character {ch:?}")]
    UnsupportedCharacter {
        /// The offending word.
        word: String,
        /// First unsupported character in the word.
        ch: char,
    },
}
