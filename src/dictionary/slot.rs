/// Number of child slots in a trie node: 26 letters plus the apostrophe.
pub const ALPHABET_SIZE: usize = 27;

/// Slot index used for the apostrophe.
pub const APOSTROPHE_SLOT: usize = 26;

/// Maps a word byte to its child slot.
///
/// Upper- and lowercase forms of a letter share a slot, so tries built on this
/// mapping are case-insensitive. Returns `None` for bytes without a slot,
/// including every non-ASCII byte.
#[inline]
pub fn slot(byte: u8) -> Option<usize> {
    match byte {
        b'a'..=b'z' => Some(usize::from(byte - b'a')),
        b'A'..=b'Z' => Some(usize::from(byte - b'A')),
        b'\'' => Some(APOSTROPHE_SLOT),
        _ => None,
    }
}

/// Returns the first character of `word` that has no slot.
pub(crate) fn unsupported_char(word: &str) -> Option<char> {
    word.chars().find(|&ch| !ch.is_ascii() || slot(ch as u8).is_none())
}
