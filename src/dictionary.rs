use crate::cache::{self, Cache};
use crate::wordlist::normalize;
use crate::{Error, TileBag, TileSet, WordSource};
use logging_timer::time;
use std::collections::BTreeMap;
use std::fmt;

/// Cache artifact holding the word scores.
const SCORES: &str = "scores";

#[derive(Debug, Clone, Default, PartialEq)]
/// The word scoring index: every word that can be spelled from one full bag,
/// with the points of the tiles it takes.
pub struct Dictionary {
    words: BTreeMap<String, u32>,
    max_len: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, longest {} letters>",
            self.words.len(),
            self.max_len
        )
    }
}

impl Dictionary {
    /// Score `words` against a fresh bag for `tileset`. Words that can not be
    /// spelled from the bag are left out.
    ///
    /// Letters are drawn before blanks, so a blank only covers a shortage and
    /// adds nothing to the score.
    /// ## Examples
    /// ```
    /// use superstring_solver::{Dictionary, TileSet};
    /// let words = vec![String::from("CAT"), String::from("ZZZZ")];
    /// let dictionary = Dictionary::build(&words, &TileSet::english());
    /// assert_eq!(dictionary.score("CAT"), Some(5));
    /// assert!(!dictionary.contains("ZZZZ"));
    /// ```
    #[time]
    pub fn build(words: &[String], tileset: &TileSet) -> Dictionary {
        let full_bag = TileBag::from_tileset(tileset);
        let words = words
            .iter()
            .filter_map(|word| {
                let mut bag = full_bag.clone();
                let tiles = bag.draw_word(word);
                if tiles.len() == word.len() {
                    Some((word.clone(), tileset.tiles_points(&tiles)))
                } else {
                    log::debug!("dropping unplayable word {}", word);
                    None
                }
            })
            .collect();
        Dictionary::from_scores(words)
    }

    /// Build from a list of words in any case.
    /// ## Errors
    /// If a word contains something else than a letter.
    pub fn from_words(words: &[&str], tileset: &TileSet) -> Result<Dictionary, Error> {
        Ok(Dictionary::build(&words.words()?, tileset))
    }

    /// Read the scores from `cache` if it has them, otherwise build them from
    /// `words` and store them in `cache`.
    /// ## Errors
    /// - If the cache file is malformed.
    /// - If the cache file can not be read or written.
    pub fn load_or_build(
        words: &[String],
        tileset: &TileSet,
        cache: Option<&Cache>,
    ) -> Result<Dictionary, Error> {
        let cache = match cache {
            Some(cache) => cache,
            None => return Ok(Dictionary::build(words, tileset)),
        };
        if let Some(entries) = cache.read(SCORES, cache::parse_score)? {
            log::info!("word scores from {}", cache.path(SCORES).display());
            return Ok(Dictionary::from_scores(entries.into_iter().collect()));
        }
        let dictionary = Dictionary::build(words, tileset);
        cache.write(SCORES, dictionary.to_lines())?;
        log::info!("word scores written to {}", cache.path(SCORES).display());
        Ok(dictionary)
    }

    fn from_scores(words: BTreeMap<String, u32>) -> Dictionary {
        let max_len = words.keys().map(String::len).max().unwrap_or(0);
        Dictionary { words, max_len }
    }

    fn to_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.words
            .iter()
            .map(|(word, score)| format!("{}={}", word, score))
    }

    /// Score of `word` in any case, if it is in the dictionary.
    pub fn score(&self, word: &str) -> Option<u32> {
        self.words.get(normalize(word).as_ref()).copied()
    }

    /// Check if `word`, in any case, is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(normalize(word).as_ref())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Iterate over `(word, score)` in word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.words.iter().map(|(word, &score)| (word.as_str(), score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_single_word() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat"], &TileSet::english())?;
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.score("CAT"), Some(5));
        Ok(())
    }

    #[test]
    fn test_lookup_any_case() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "Cats"], &TileSet::english())?;
        assert_eq!(dictionary.score("cat"), Some(5));
        assert_eq!(dictionary.score("CaTs"), Some(6));
        assert!(dictionary.contains("Cat"));
        assert!(!dictionary.contains("ca"));
        Ok(())
    }

    #[test]
    fn test_letter_limits() -> Result<()> {
        let words = &["aa", "zzz", "zzzz", "qqqq", "eeeeeeeeeeeeee", "eeeeeeeeeeeeeee"];
        let dictionary = Dictionary::from_words(words, &TileSet::english())?;
        assert_eq!(dictionary.score("AA"), Some(2));
        // one real Z and two blanks
        assert_eq!(dictionary.score("ZZZ"), Some(10));
        assert!(!dictionary.contains("ZZZZ"));
        assert!(!dictionary.contains("QQQQ"));
        // 12 E's and two blanks
        assert_eq!(dictionary.score("EEEEEEEEEEEEEE"), Some(12));
        assert!(!dictionary.contains("EEEEEEEEEEEEEEE"));
        assert_eq!(dictionary.max_len(), 14);
        Ok(())
    }

    #[test]
    fn test_cache_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let tileset = TileSet::english();
        let words: Vec<String> = ["HE", "THE", "THEM", "THEME"]
            .iter()
            .map(|&word| String::from(word))
            .collect();
        let cache = Cache::for_words(dir.path(), &words, &tileset);
        let built = Dictionary::load_or_build(&words, &tileset, Some(&cache))?;
        assert!(cache.path(SCORES).exists());
        let loaded = Dictionary::load_or_build(&[], &tileset, Some(&cache))?;
        assert_eq!(built, loaded);
        assert_eq!(loaded.score("THEME"), Some(10));
        Ok(())
    }

    #[test]
    fn test_malformed_cache() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let tileset = TileSet::english();
        let cache = Cache::new(dir.path(), "bad");
        cache.write(SCORES, vec![String::from("CAT=5"), String::from("DOG=")])?;
        let result = Dictionary::load_or_build(&[], &tileset, Some(&cache));
        assert!(matches!(result, Err(Error::CacheParseError { line: 2, .. })));
        Ok(())
    }
}
