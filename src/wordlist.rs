use crate::Error;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Anything that can provide the raw word list.
///
/// Words come back uppercased, de-duplicated and sorted.
pub trait WordSource {
    /// Return the words.
    /// ## Errors
    /// If the words can not be read or one of them is not a plain `a..z` word.
    fn words(&self) -> Result<Vec<String>, Error>;
}

/// A wordfile with one word per line.
#[derive(Debug, Clone)]
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    pub fn new<P: AsRef<Path>>(path: P) -> WordFile {
        WordFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for WordFile {
    fn words(&self) -> Result<Vec<String>, Error> {
        let path = self.path.display().to_string();
        let text = read_to_string(&self.path).map_err(|source| Error::ReadError {
            path: path.clone(),
            source,
        })?;
        let words = parse_words(&text, &path)?;
        log::info!("read {} words from \"{}\"", words.len(), path);
        Ok(words)
    }
}

impl WordSource for [&str] {
    fn words(&self) -> Result<Vec<String>, Error> {
        parse_words(&self.join("\n"), "<words>")
    }
}

/// Words are stored uppercase. Lookups accept any case, and only allocate
/// when `word` has a lowercase letter.
pub(crate) fn normalize(word: &str) -> Cow<'_, str> {
    if word.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(word.to_ascii_uppercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// Parse the text of a wordfile.
///
/// Everything after `#` is a comment, only the first token of a line is
/// used, and blank lines are skipped. `path` is only used in errors.
/// ## Errors
/// If a word contains a character other than `a..z` (either case).
/// ## Examples
/// ```
/// # use superstring_solver::{parse_words, Error};
/// let words = parse_words("cat # a pet\n\nDog 12\ncat\n", "pets.txt")?;
/// assert_eq!(words, vec!["CAT", "DOG"]);
/// # Ok::<(), Error>(())
/// ```
pub fn parse_words(text: &str, path: &str) -> Result<Vec<String>, Error> {
    let mut words = BTreeSet::new();
    for (i, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or("");
        let word = match content.split_whitespace().next() {
            Some(word) => word,
            None => continue,
        };
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidWord {
                path: String::from(path),
                line: i + 1,
                word: String::from(word),
            });
        }
        words.insert(word.to_ascii_uppercase());
    }
    Ok(words.into_iter().collect())
}
