//! On-disk memoization of the word scores and cross references.
//!
//! Every artifact is a text file with one `KEY=VALUE` entry per line, stored
//! as `<artifact>-<key>.txt` in the cache directory. The key is a hash of the
//! word list and the tile distribution, so a changed word list never reads a
//! stale file.
use crate::{Error, TileSet};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Number of hex digits of the content hash used in file names.
const KEY_LEN: usize = 16;

/// Hash the normalized word list together with the tile distribution.
pub fn content_key(words: &[String], tileset: &TileSet) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(tileset.to_string().as_bytes());
    for word in words {
        hasher.update(b"\n");
        hasher.update(word.as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    String::from(&hex.as_str()[..KEY_LEN])
}

#[derive(Debug, Clone)]
/// A cache directory together with the content key of one word list.
pub struct Cache {
    dir: PathBuf,
    key: String,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(dir: P, key: &str) -> Cache {
        Cache {
            dir: dir.as_ref().to_path_buf(),
            key: String::from(key),
        }
    }

    /// Cache for the artifacts derived from `words`.
    pub fn for_words<P: AsRef<Path>>(dir: P, words: &[String], tileset: &TileSet) -> Cache {
        Cache::new(dir, &content_key(words, tileset))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name of `artifact`.
    pub fn path(&self, artifact: &str) -> PathBuf {
        self.dir.join(format!("{}-{}.txt", artifact, self.key))
    }

    /// Read and parse `artifact`, or `None` if it has not been written yet.
    ///
    /// `parse` gets the text before and after the first `=` of every line.
    /// ## Errors
    /// - If the file exists but can not be read.
    /// - If a line has no `=`, or `parse` rejects it.
    pub fn read<T, F>(&self, artifact: &str, mut parse: F) -> Result<Option<Vec<T>>, Error>
    where
        F: FnMut(&str, &str) -> Result<T, String>,
    {
        let path = self.path(artifact);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ReadError {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        let mut entries = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let entry = line
                .split_once('=')
                .ok_or_else(|| String::from("missing '='"))
                .and_then(|(key, value)| parse(key, value))
                .map_err(|reason| Error::CacheParseError {
                    path: path.display().to_string(),
                    line: i + 1,
                    reason,
                })?;
            entries.push(entry);
        }
        log::debug!("read {} entries from {}", entries.len(), path.display());
        Ok(Some(entries))
    }

    /// Write `artifact` with one line per item. The file is replaced atomically.
    /// ## Errors
    /// If the directory or the file can not be written.
    pub fn write<I>(&self, artifact: &str, lines: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = String>,
    {
        let path = self.path(artifact);
        let write_error = |source| Error::WriteError {
            path: path.display().to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_error)?;
        let temp_file = NamedTempFile::new_in(&self.dir).map_err(write_error)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            for line in lines {
                writeln!(writer, "{}", line).map_err(write_error)?;
            }
            writer.flush().map_err(write_error)?;
        }
        temp_file
            .persist(&path)
            .map_err(|err| write_error(err.error))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Check that `word` is a non-empty uppercase word.
pub(crate) fn check_word(word: &str) -> Result<(), String> {
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(format!("invalid word \"{}\"", word))
    }
}

/// Parse a `WORD=INTEGER` entry.
pub(crate) fn parse_score(key: &str, value: &str) -> Result<(String, u32), String> {
    check_word(key)?;
    let score = value
        .parse::<u32>()
        .map_err(|_| format!("invalid score \"{}\" for \"{}\"", value, key))?;
    Ok((String::from(key), score))
}

/// Parse a `KEY=WORD WORD ...` entry.
pub(crate) fn parse_word_list(key: &str, value: &str) -> Result<(String, Vec<String>), String> {
    check_word(key)?;
    let words = value
        .split(' ')
        .map(|word| check_word(word).map(|_| String::from(word)))
        .collect::<Result<Vec<String>, String>>()?;
    Ok((String::from(key), words))
}

/// Format a `KEY=WORD WORD ...` entry.
pub(crate) fn format_word_list<I, S>(key: &str, words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = format!("{}=", key);
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(word.as_ref());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&word| String::from(word)).collect()
    }

    #[test]
    fn test_content_key() {
        let tileset = TileSet::english();
        let a = content_key(&words(&["CAT", "DOG"]), &tileset);
        let b = content_key(&words(&["CAT", "DOG"]), &tileset);
        let c = content_key(&words(&["CAT", "DOGS"]), &tileset);
        let d = content_key(&words(&["CATD", "OG"]), &tileset);
        assert_eq!(a.len(), KEY_LEN);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_write_read() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cache = Cache::new(dir.path(), "0123");
        assert!(cache.read("scores", parse_score)?.is_none());
        cache.write("scores", vec![String::from("CAT=5"), String::from("QI=11")])?;
        assert!(cache.path("scores").ends_with("scores-0123.txt"));
        let entries = cache.read("scores", parse_score)?.unwrap();
        assert_eq!(
            entries,
            vec![(String::from("CAT"), 5), (String::from("QI"), 11)]
        );
        Ok(())
    }

    #[test]
    fn test_malformed_line() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cache = Cache::new(dir.path(), "k");
        cache.write("scores", vec![String::from("CAT=5"), String::from("DOG")])?;
        match cache.read("scores", parse_score) {
            Err(Error::CacheParseError { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
        cache.write("scores", vec![String::from("CAT=five")])?;
        assert!(cache.read("scores", parse_score).is_err());
        Ok(())
    }

    #[test]
    fn test_word_list_entry() {
        let entry = parse_word_list("CA", "CAT CATS").unwrap();
        assert_eq!(entry, (String::from("CA"), words(&["CAT", "CATS"])));
        assert_eq!(format_word_list(&entry.0, &entry.1), "CA=CAT CATS");
        assert!(parse_word_list("CA", "CAT  CATS").is_err());
        assert!(parse_word_list("ca", "CAT").is_err());
    }
}
