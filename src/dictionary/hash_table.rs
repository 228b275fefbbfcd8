use std::fmt;
use std::io::BufRead;

use smallvec::SmallVec;
use tracing::{info, trace, warn};

use super::error::LoadError;
use super::word_list::for_each_word;
use super::{Dictionary, MAX_WORD_LENGTH};

/// Number of buckets used by [`HashDictionary::default`].
pub const DEFAULT_BUCKETS: usize = 4099;

const DJB2_SEED: u64 = 5381;

/// A word stored verbatim, linked to the next entry of its bucket.
struct Entry {
    word: Box<str>,
    next: Option<Box<Entry>>,
}

/// A dictionary backed by a fixed array of buckets, each the head of a singly
/// linked list of words.
///
/// Words are stored with their original casing. The bucket is chosen from the
/// lowercased word, and lookups compare case-insensitively, so `check` accepts
/// any casing of a loaded word.
///
/// # Examples
///
/// ```
/// use spelldict::{Dictionary, HashDictionary};
///
/// let mut dict = HashDictionary::default();
/// dict.load_reader(&mut "apple Banana\ncan't".as_bytes()).unwrap();
/// assert_eq!(dict.size(), 3);
/// assert!(dict.check("BANANA"));
/// assert!(!dict.check("cant"));
/// ```
pub struct HashDictionary {
    buckets: Vec<Option<Box<Entry>>>,
    count: usize,
}

impl HashDictionary {
    /// Creates an empty dictionary with `buckets` chains.
    ///
    /// A bucket count of zero is raised to one.
    pub fn with_buckets(buckets: usize) -> Self {
        let mut table = Vec::with_capacity(buckets.max(1));
        table.resize_with(buckets.max(1), || None);
        HashDictionary {
            buckets: table,
            count: 0,
        }
    }

    /// Returns the number of buckets.
    pub fn buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket index `word` hashes to. Casing does not matter.
    pub fn bucket_of(&self, word: &str) -> usize {
        (hash(word) % self.buckets.len() as u64) as usize
    }

    fn insert(&mut self, word: &str) -> Result<(), LoadError> {
        let mut stored = String::new();
        stored
            .try_reserve_exact(word.len())
            .map_err(|_| LoadError::OutOfMemory)?;
        stored.push_str(word);

        let index = self.bucket_of(word);
        let head = &mut self.buckets[index];
        *head = Some(Box::new(Entry {
            word: stored.into_boxed_str(),
            next: head.take(),
        }));
        self.count += 1;
        Ok(())
    }

    fn load_words(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError> {
        for_each_word(reader, |word| self.insert(word))
    }
}

impl Default for HashDictionary {
    fn default() -> Self {
        HashDictionary::with_buckets(DEFAULT_BUCKETS)
    }
}

impl Dictionary for HashDictionary {
    fn load_reader(&mut self, reader: &mut dyn BufRead) -> Result<(), LoadError> {
        self.unload();
        self.count = 0;
        match self.load_words(reader) {
            Ok(()) => {
                info!(words = self.count, buckets = self.buckets.len(), "hash dictionary loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, loaded = self.count, "hash dictionary load failed");
                self.unload();
                self.count = 0;
                Err(e)
            }
        }
    }

    fn check(&self, word: &str) -> bool {
        let mut cursor = self.buckets[self.bucket_of(word)].as_deref();
        while let Some(entry) = cursor {
            if entry.word.eq_ignore_ascii_case(word) {
                return true;
            }
            cursor = entry.next.as_deref();
        }
        false
    }

    fn size(&self) -> usize {
        self.count
    }

    fn unload(&mut self) -> bool {
        let mut freed = 0usize;
        for head in self.buckets.iter_mut() {
            // Unlink one entry at a time; dropping the head directly would recurse
            // down the whole chain.
            let mut cursor = head.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
                freed += 1;
            }
        }
        if freed > 0 {
            trace!(entries = freed, "hash dictionary unloaded");
        }
        true
    }
}

impl Drop for HashDictionary {
    fn drop(&mut self) {
        self.unload();
    }
}

impl fmt::Debug for HashDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashDictionary")
            .field("buckets", &self.buckets.len())
            .field("size", &self.count)
            .finish()
    }
}

/// djb2 hash of the ASCII-lowercased `word`.
///
/// Words up to 64 bytes, which covers [`MAX_WORD_LENGTH`], are folded in a
/// stack buffer; longer input spills to the heap rather than overrunning it.
pub fn hash(word: &str) -> u64 {
    let folded: SmallVec<[u8; 64]> =
        word.bytes().map(|b| b.to_ascii_lowercase()).collect();
    folded.iter().fold(DJB2_SEED, |acc, &b| {
        acc.wrapping_mul(33).wrapping_add(u64::from(b))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn loaded(words: &str) -> HashDictionary {
        let mut dict = HashDictionary::default();
        dict.load_reader(&mut Cursor::new(words)).unwrap();
        dict
    }

    fn chain_len(dict: &HashDictionary, index: usize) -> usize {
        let mut len = 0;
        let mut cursor = dict.buckets[index].as_deref();
        while let Some(entry) = cursor {
            len += 1;
            cursor = entry.next.as_deref();
        }
        len
    }

    #[test]
    fn djb2_known_values() {
        assert_eq!(hash(""), 5381);
        assert_eq!(hash("a"), 5381 * 33 + 97);
        assert_eq!(hash("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn hash_ignores_case() {
        assert_eq!(hash("Can't"), hash("CAN'T"));
        assert_eq!(hash("zoo"), hash("ZoO"));
    }

    #[test]
    fn hash_wraps_instead_of_overflowing() {
        // reference computed in u128 and reduced mod 2^64 at every step
        fn reference(word: &str) -> u64 {
            word.bytes().fold(5381u128, |acc, b| {
                (acc * 33 + u128::from(b.to_ascii_lowercase())) % (1u128 << 64)
            }) as u64
        }
        // 33^13 already exceeds u64::MAX
        for word in ["Pneumonoultramicroscopicsilicovolcanoconiosis", "zzzzzzzzzzzzzzzz"] {
            assert_eq!(hash(word), reference(word), "{word}");
        }
        let long = "Z".repeat(MAX_WORD_LENGTH * 4);
        assert_eq!(hash(&long), reference(&long));
    }

    #[test]
    fn zero_buckets_is_raised_to_one() {
        let mut dict = HashDictionary::with_buckets(0);
        assert_eq!(dict.buckets(), 1);
        dict.load_reader(&mut Cursor::new("one two three")).unwrap();
        assert!(dict.check("TWO"));
        assert_eq!(chain_len(&dict, 0), 3);
    }

    #[test]
    fn newest_entry_is_bucket_head() {
        let dict = {
            let mut d = HashDictionary::with_buckets(1);
            d.load_reader(&mut Cursor::new("first second")).unwrap();
            d
        };
        assert_eq!(dict.buckets[0].as_deref().map(|e| &*e.word), Some("second"));
    }

    #[test]
    fn stores_original_casing() {
        let dict = loaded("Banana");
        let entry = dict.buckets[dict.bucket_of("banana")].as_deref().unwrap();
        assert_eq!(&*entry.word, "Banana");
        assert!(dict.check("banana"));
        assert!(dict.check("bAnAnA"));
    }

    #[test]
    fn duplicates_are_counted() {
        let dict = loaded("apple APPLE apple");
        assert_eq!(dict.size(), 3);
        assert_eq!(chain_len(&dict, dict.bucket_of("apple")), 3);
    }

    #[test]
    fn prefix_is_not_a_match() {
        let dict = loaded("apple");
        assert!(!dict.check("app"));
        assert!(!dict.check("apples"));
        assert!(!dict.check(""));
    }

    #[test]
    fn non_letter_tokens_are_stored_verbatim() {
        let dict = loaded("e-mail 42");
        assert!(dict.check("E-MAIL"));
        assert!(dict.check("42"));
    }

    #[test]
    fn unload_empties_every_bucket() {
        let mut dict = HashDictionary::with_buckets(7);
        dict.load_reader(&mut Cursor::new("a b c d e f g h i j")).unwrap();
        assert!(dict.unload());
        assert!((0..7).all(|i| dict.buckets[i].is_none()));
        assert!(!dict.check("a"));
        assert!(dict.unload());
        assert_eq!(dict.size(), 10);
    }

    #[test]
    fn failed_load_releases_partial_state() {
        let mut dict = HashDictionary::default();
        let input = format!("kept words\n{}", "x".repeat(MAX_WORD_LENGTH + 1));
        let res = dict.load_reader(&mut Cursor::new(input));
        assert!(matches!(res, Err(LoadError::WordTooLong { .. })));
        assert_eq!(dict.size(), 0);
        assert!(!dict.check("kept"));
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let mut dict = HashDictionary::with_buckets(1);
        let words = (0..200_000).map(|i| format!("w{i}\n")).collect::<String>();
        dict.load_reader(&mut Cursor::new(words)).unwrap();
        assert_eq!(dict.size(), 200_000);
        drop(dict);
    }
}
