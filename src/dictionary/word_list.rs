use std::io::BufRead;

use super::error::LoadError;
use super::MAX_WORD_LENGTH;

/// Calls `f` for every whitespace-delimited word in `reader`, in file order.
///
/// Words longer than [`MAX_WORD_LENGTH`] bytes stop the scan with
/// [`LoadError::WordTooLong`]. Errors returned by `f` stop the scan as well and
/// are passed through unchanged.
pub fn for_each_word<F>(reader: &mut dyn BufRead, mut f: F) -> Result<(), LoadError>
where
    F: FnMut(&str) -> Result<(), LoadError>,
{
    // read_line into one reused buffer instead of lines(), which would allocate
    // a fresh String for every line of a several-hundred-thousand line file.
    let mut buf = String::with_capacity(80);
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(());
        }
        for word in buf.split_ascii_whitespace() {
            if word.len() > MAX_WORD_LENGTH {
                return Err(LoadError::WordTooLong {
                    word: word.to_string(),
                    max: MAX_WORD_LENGTH,
                });
            }
            f(word)?;
        }
    }
}
