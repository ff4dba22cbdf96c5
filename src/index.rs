use crate::cache::{self, Cache};
use crate::wordlist::normalize;
use crate::xref::{CrossReference, Side};
use crate::{Dictionary, Error, TileBag};
use logging_timer::time;
use std::collections::BTreeMap;
use std::fmt;

/// Cache artifact holding the sub-word table.
const SUBWORDS: &str = "subwords";

/// Owns the live word set together with the tables that refer to it.
///
/// A word leaves the live set when it has been scored or when the bag can no
/// longer spell it. [`prune`](IndexManager::prune) is the only way out, and it
/// updates every table at once.
#[derive(Debug, Clone)]
pub struct IndexManager {
    /// live word -> score
    live: BTreeMap<String, u32>,
    prefixes: CrossReference,
    suffixes: CrossReference,
    /// word -> dictionary words inside it, itself included. Never pruned,
    /// lookups filter on `live`.
    subwords: BTreeMap<String, Vec<String>>,
}

impl fmt::Display for IndexManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<IndexManager: {} live words, {} prefixes, {} suffixes>",
            self.live.len(),
            self.prefixes.len(),
            self.suffixes.len()
        )
    }
}

/// All dictionary words that occur in `word`, in order of their end, then start.
fn find_subwords(dictionary: &Dictionary, word: &str) -> Vec<String> {
    let mut found = Vec::new();
    for j in 1..=word.len() {
        for i in j.saturating_sub(dictionary.max_len())..j {
            let part = &word[i..j];
            if dictionary.contains(part) {
                found.push(String::from(part));
            }
        }
    }
    found.sort_unstable();
    found.dedup();
    found
}

impl IndexManager {
    /// Build all tables with every dictionary word live.
    #[time]
    pub fn build(dictionary: &Dictionary) -> IndexManager {
        let prefixes = CrossReference::build(Side::Prefix, dictionary.iter().map(|(w, _)| w));
        let suffixes = CrossReference::build(Side::Suffix, dictionary.iter().map(|(w, _)| w));
        let subwords = dictionary
            .iter()
            .map(|(word, _)| (String::from(word), find_subwords(dictionary, word)))
            .collect();
        IndexManager::from_parts(dictionary, prefixes, suffixes, subwords)
    }

    fn from_parts(
        dictionary: &Dictionary,
        prefixes: CrossReference,
        suffixes: CrossReference,
        subwords: BTreeMap<String, Vec<String>>,
    ) -> IndexManager {
        let live = dictionary
            .iter()
            .map(|(word, score)| (String::from(word), score))
            .collect();
        let index = IndexManager {
            live,
            prefixes,
            suffixes,
            subwords,
        };
        log::info!("{}", index);
        index
    }

    /// Read the tables from `cache` if they are all there, otherwise build
    /// them and store them in `cache`.
    /// ## Errors
    /// - If a cache file is malformed or names a word that is not in `dictionary`.
    /// - If a cache file can not be read or written.
    pub fn load_or_build(
        dictionary: &Dictionary,
        cache: Option<&Cache>,
    ) -> Result<IndexManager, Error> {
        let cache = match cache {
            Some(cache) => cache,
            None => return Ok(IndexManager::build(dictionary)),
        };
        let parse = |key: &str, value: &str| -> Result<(String, Vec<String>), String> {
            let (key, words) = cache::parse_word_list(key, value)?;
            match words.iter().find(|word| !dictionary.contains(word)) {
                Some(word) => Err(format!("unknown word \"{}\"", word)),
                None => Ok((key, words)),
            }
        };
        let prefixes = cache.read(Side::Prefix.artifact(), parse)?;
        let suffixes = cache.read(Side::Suffix.artifact(), parse)?;
        let subwords = cache.read(SUBWORDS, parse)?;
        if let (Some(prefixes), Some(suffixes), Some(subwords)) = (prefixes, suffixes, subwords) {
            log::info!("cross references from {}", cache.dir().display());
            return Ok(IndexManager::from_parts(
                dictionary,
                CrossReference::from_entries(Side::Prefix, prefixes),
                CrossReference::from_entries(Side::Suffix, suffixes),
                subwords.into_iter().collect(),
            ));
        }
        let index = IndexManager::build(dictionary);
        index.store(cache)?;
        Ok(index)
    }

    fn store(&self, cache: &Cache) -> Result<(), Error> {
        for xref in &[&self.prefixes, &self.suffixes] {
            let lines = xref
                .iter()
                .map(|(key, words)| cache::format_word_list(key, words));
            cache.write(xref.side().artifact(), lines)?;
        }
        let lines = self
            .subwords
            .iter()
            .map(|(word, parts)| cache::format_word_list(word, parts));
        cache.write(SUBWORDS, lines)?;
        log::info!("cross references written to {}", cache.dir().display());
        Ok(())
    }

    /// Take `word` out of the live set and out of both cross references.
    /// Returns false if it was not live.
    pub fn prune(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if self.live.remove(word.as_ref()).is_none() {
            return false;
        }
        self.prefixes.remove(&word);
        self.suffixes.remove(&word);
        true
    }

    /// Prune every live word that can not be spelled from `bag`.
    /// Returns the number of pruned words.
    pub fn retain_playable(&mut self, bag: &TileBag) -> usize {
        let unplayable: Vec<String> = self
            .live
            .keys()
            .filter(|word| !bag.can_spell(word))
            .cloned()
            .collect();
        for word in &unplayable {
            self.prune(word);
        }
        unplayable.len()
    }

    /// Sum of the scores of the live words inside `word`.
    pub fn potential(&self, word: &str) -> u32 {
        match self.subwords.get(normalize(word).as_ref()) {
            Some(parts) => parts.iter().filter_map(|part| self.live.get(part)).sum(),
            None => 0,
        }
    }

    /// Live words that start with `fragment`, in any case, and are longer than it.
    pub fn extending<'a>(&'a self, fragment: &str) -> impl Iterator<Item = &'a str> {
        self.prefixes
            .get(fragment)
            .into_iter()
            .flatten()
            .map(|word| &**word)
    }

    /// Live words that end with `fragment`, in any case, and are longer than it.
    pub fn ending_with<'a>(&'a self, fragment: &str) -> impl Iterator<Item = &'a str> {
        self.suffixes
            .get(fragment)
            .into_iter()
            .flatten()
            .map(|word| &**word)
    }

    pub fn is_live(&self, word: &str) -> bool {
        self.live.contains_key(normalize(word).as_ref())
    }

    /// Score of a live word.
    pub fn score(&self, word: &str) -> Option<u32> {
        self.live.get(normalize(word).as_ref()).copied()
    }

    /// Iterate over the live words and their scores, in word order.
    pub fn live_words(&self) -> impl Iterator<Item = (&str, u32)> {
        self.live.iter().map(|(word, &score)| (word.as_str(), score))
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn prefixes(&self) -> &CrossReference {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &CrossReference {
        &self.suffixes
    }

    /// Dictionary words inside `word`, live or not.
    pub fn subwords(&self, word: &str) -> &[String] {
        self.subwords
            .get(normalize(word).as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Longest fragment that can have a match in the prefix index.
    pub fn max_fragment_len(&self) -> usize {
        self.prefixes.max_key_len()
    }

    /// Check that both cross references only name live words that `bag` can
    /// spell, and have no empty keys.
    pub fn is_consistent(&self, bag: &TileBag) -> bool {
        [&self.prefixes, &self.suffixes].iter().all(|xref| {
            xref.iter().all(|(_, words)| {
                !words.is_empty()
                    && words
                        .iter()
                        .all(|word| self.is_live(word) && bag.can_spell(word))
            })
        })
    }
}
