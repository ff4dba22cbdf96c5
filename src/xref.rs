use crate::wordlist::normalize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

/// Which end of a word a [`CrossReference`] is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// keys are proper prefixes: `CAT` is filed under `C` and `CA`
    Prefix,
    /// keys are proper suffixes: `CAT` is filed under `AT` and `T`
    Suffix,
}

impl Side {
    /// The keys `word` is filed under. Never the empty string or the word itself.
    pub fn keys(self, word: &str) -> impl Iterator<Item = &str> {
        (1..word.len()).map(move |i| match self {
            Side::Prefix => &word[..i],
            Side::Suffix => &word[i..],
        })
    }

    /// Name of the cache artifact.
    pub fn artifact(self) -> &'static str {
        match self {
            Side::Prefix => "prefixes",
            Side::Suffix => "suffixes",
        }
    }
}

/// Map from a fragment to the words that start (or end) with it.
///
/// A word is filed under many keys, so the sets share one `Rc<str>` per word.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossReference {
    side: Side,
    map: BTreeMap<String, BTreeSet<Rc<str>>>,
    max_key_len: usize,
}

impl fmt::Display for CrossReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<CrossReference {:?}: {} keys>", self.side, self.map.len())
    }
}

impl CrossReference {
    pub fn new(side: Side) -> CrossReference {
        CrossReference {
            side,
            map: BTreeMap::new(),
            max_key_len: 0,
        }
    }

    /// Build the cross reference for `words`.
    pub fn build<'a, I>(side: Side, words: I) -> CrossReference
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut xref = CrossReference::new(side);
        for word in words {
            xref.insert(word);
        }
        xref
    }

    /// Build from `(key, words)` entries, as read from the cache.
    pub fn from_entries<I>(side: Side, entries: I) -> CrossReference
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut xref = CrossReference::new(side);
        let mut shared: BTreeSet<Rc<str>> = BTreeSet::new();
        for (key, words) in entries {
            xref.max_key_len = xref.max_key_len.max(key.len());
            let set = xref.map.entry(key).or_default();
            for word in words {
                let word = shared
                    .get(word.as_str())
                    .cloned()
                    .unwrap_or_else(|| Rc::from(word));
                shared.insert(Rc::clone(&word));
                set.insert(word);
            }
        }
        xref
    }

    /// File `word` under all its keys.
    pub fn insert(&mut self, word: &str) {
        let shared: Rc<str> = Rc::from(word);
        for key in self.side.keys(word) {
            self.max_key_len = self.max_key_len.max(key.len());
            self.map
                .entry(String::from(key))
                .or_default()
                .insert(Rc::clone(&shared));
        }
    }

    /// Remove `word` from all its keys, and drop keys that end up empty.
    pub fn remove(&mut self, word: &str) {
        for key in self.side.keys(word) {
            let exhausted = match self.map.get_mut(key) {
                Some(words) => {
                    words.remove(word);
                    words.is_empty()
                }
                None => false,
            };
            if exhausted {
                self.map.remove(key);
            }
        }
    }

    /// The words filed under `fragment`, in any case.
    pub fn get(&self, fragment: &str) -> Option<&BTreeSet<Rc<str>>> {
        self.map.get(normalize(fragment).as_ref())
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Length of the longest key ever inserted. Longer fragments never match.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<Rc<str>>)> {
        self.map.iter()
    }
}
