use crate::solution::Find;
use std::collections::{BTreeMap, HashSet};

/// The words found in the sequence so far, keyed by start offset and word.
/// A word is only ever recorded once.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    entries: BTreeMap<(usize, String), u32>,
    found: HashSet<String>,
}

impl ScoreLedger {
    pub fn new() -> ScoreLedger {
        ScoreLedger::default()
    }

    /// Record `word` at `offset`. Returns false, and records nothing, if the
    /// word has been found before.
    pub fn record(&mut self, offset: usize, word: &str, score: u32) -> bool {
        if !self.found.insert(String::from(word)) {
            return false;
        }
        self.entries.insert((offset, String::from(word)), score);
        true
    }

    /// Check if `word` has been found.
    pub fn contains(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Sum of all recorded scores.
    pub fn total(&self) -> u32 {
        self.entries.values().sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(offset, word, score)` by offset, then word.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, u32)> {
        self.entries
            .iter()
            .map(|((offset, word), &score)| (*offset, word.as_str(), score))
    }

    /// The recorded words, by offset, then longest first.
    pub fn finds(&self) -> Vec<Find> {
        let mut finds: Vec<Find> = self
            .iter()
            .map(|(offset, word, score)| Find {
                offset,
                word: String::from(word),
                score,
            })
            .collect();
        finds.sort_by(|a, b| {
            a.offset
                .cmp(&b.offset)
                .then(b.word.len().cmp(&a.word.len()))
                .then(a.word.cmp(&b.word))
        });
        finds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_once() {
        let mut ledger = ScoreLedger::new();
        assert!(ledger.record(1, "HE", 5));
        assert!(ledger.record(0, "THE", 6));
        assert!(!ledger.record(6, "HE", 5));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), 11);
        assert!(ledger.contains("HE"));
        assert!(!ledger.contains("EH"));
    }

    #[test]
    fn test_finds_order() {
        let mut ledger = ScoreLedger::new();
        ledger.record(1, "HE", 5);
        ledger.record(0, "THE", 6);
        ledger.record(0, "THEME", 10);
        ledger.record(0, "THEM", 9);
        let finds: Vec<(usize, String)> = ledger
            .finds()
            .into_iter()
            .map(|find| (find.offset, find.word))
            .collect();
        let expect = [(0, "THEME"), (0, "THEM"), (0, "THE"), (1, "HE")];
        let expect: Vec<(usize, String)> = expect
            .iter()
            .map(|&(offset, word)| (offset, String::from(word)))
            .collect();
        assert_eq!(finds, expect);
        let total: u32 = ledger.iter().map(|(_, _, score)| score).sum();
        assert_eq!(total, ledger.total());
    }
}
