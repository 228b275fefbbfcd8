//! Example: reporting misspelled words in a text file.
//!
//! Loads a word list into the chosen dictionary, checks every word of the
//! text, and prints the words that were not found.
//!
//! Run with: cargo run --example speller -- [hash|trie|arena] DICTIONARY TEXT

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use spelldict::{Dictionary, Kind, MAX_WORD_LENGTH};

/// Splits text into candidate words: runs of letters and apostrophes that
/// contain no digits and fit in a dictionary word.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty() && w.len() <= MAX_WORD_LENGTH)
        .filter(|w| !w.bytes().any(|b| b.is_ascii_digit()))
}

fn run(kind: Kind, dictionary: &Path, text: &Path) -> Result<(), Box<dyn Error>> {
    let mut dict = kind.build();
    dict.load(dictionary)?;
    let text = fs::read_to_string(text)?;

    println!("MISSPELLED WORDS\n");
    let mut checked = 0;
    let mut misspelled = 0;
    for word in words(&text) {
        checked += 1;
        if !dict.check(word) {
            misspelled += 1;
            println!("{word}");
        }
    }

    println!("\nDICTIONARY ({kind}): {}", dict.size());
    println!("WORDS IN TEXT:       {checked}");
    println!("WORDS MISSPELLED:    {misspelled}");
    dict.unload();
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (kind, dictionary, text) = match args.as_slice() {
        [kind, dictionary, text] => match kind.parse::<Kind>() {
            Ok(kind) => (kind, dictionary, text),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("Usage: speller [hash|trie|arena] DICTIONARY TEXT");
            return ExitCode::FAILURE;
        }
    };
    match run(kind, Path::new(dictionary), Path::new(text)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
