use crate::ledger::ScoreLedger;
use crate::tiles::{tiles_to_string, Tile};
use crate::{Dictionary, Error, IndexManager, Solution, TileBag, TileSet};
use logging_timer::time;
use std::cmp::Ordering;

/// A candidate extension: a live word placed at the end of the sequence,
/// overlapping the last `overlap` letters that are already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// the word that will end the sequence
    pub word: String,
    /// number of letters of `word` already at the end of the sequence
    pub overlap: usize,
    /// sum of the scores of the live words inside `word`
    pub potential: u32,
}

impl Extension {
    /// The letters that have to be drawn.
    pub fn letters(&self) -> &str {
        &self.word[self.overlap..]
    }

    /// Ranking of candidates: higher potential, then fewer tiles, then word order.
    fn rank(potential: u32, tiles: usize, word: &str, other: &Extension) -> Ordering {
        potential
            .cmp(&other.potential)
            .then(other.letters().len().cmp(&tiles))
            .then(other.word.as_str().cmp(word))
    }
}

/// Solver state: building while there are tiles in the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Building,
    Done,
}

/// Greedy superstring builder.
///
/// Every step appends the live word with the highest potential, reusing as
/// much of the end of the sequence as possible, and records every word that
/// appears. When no live word is left the rest of the bag is appended as is.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    tileset: TileSet,
    dictionary: &'a Dictionary,
    index: IndexManager,
    bag: TileBag,
    tiles: Vec<Tile>,
    sequence: String,
    ledger: ScoreLedger,
}

impl<'a> Solver<'a> {
    /// Create a solver with a full bag. `index` must be built from `dictionary`.
    /// ## Examples
    /// ```
    /// # use superstring_solver::{Dictionary, Error, IndexManager, Solver, TileSet};
    /// let tileset = TileSet::english();
    /// let dictionary = Dictionary::from_words(&["he", "the", "them", "theme"], &tileset)?;
    /// let index = IndexManager::build(&dictionary);
    /// let solution = Solver::new(tileset, &dictionary, index).run()?;
    /// assert_eq!(solution.sequence.len(), 100);
    /// assert_eq!(solution.total, 30);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(tileset: TileSet, dictionary: &'a Dictionary, index: IndexManager) -> Solver<'a> {
        let bag = TileBag::from_tileset(&tileset);
        Solver {
            tileset,
            dictionary,
            index,
            bag,
            tiles: Vec::new(),
            sequence: String::new(),
            ledger: ScoreLedger::new(),
        }
    }

    pub fn state(&self) -> State {
        if self.bag.is_empty() {
            State::Done
        } else {
            State::Building
        }
    }

    pub fn is_done(&self) -> bool {
        self.state() == State::Done
    }

    /// Find the best extension of the current sequence, or `None` if no live
    /// word is left.
    pub fn next(&self) -> Option<Extension> {
        let mut best: Option<Extension> = None;
        let mut consider = |word: &str, overlap: usize| {
            let potential = self.index.potential(word);
            let tiles = word.len() - overlap;
            let better = match &best {
                Some(current) => Extension::rank(potential, tiles, word, current) == Ordering::Greater,
                None => true,
            };
            if better {
                best = Some(Extension {
                    word: String::from(word),
                    overlap,
                    potential,
                });
            }
        };
        let len = self.sequence.len();
        for start in len.saturating_sub(self.index.max_fragment_len())..len {
            let suffix = &self.sequence[start..];
            for word in self.index.extending(suffix) {
                consider(word, suffix.len());
            }
        }
        for (word, _) in self.index.live_words() {
            consider(word, 0);
        }
        best
    }

    /// Take one step: play the best extension, or drain the bag if there is none.
    /// ## Errors
    /// [`Error::DrawError`] if the tiles for a live word can not be drawn.
    /// The index and the bag disagree, and the run can not go on.
    pub fn step(&mut self) -> Result<State, Error> {
        if self.is_done() {
            return Ok(State::Done);
        }
        match self.next() {
            Some(extension) => {
                log::info!(
                    "{:3}: {}+{} potential {}",
                    self.tiles.len(),
                    &extension.word[..extension.overlap],
                    extension.letters(),
                    extension.potential
                );
                self.play(extension.letters())?;
            }
            None => {
                let tiles = self.bag.drain();
                log::info!(
                    "{:3}: no words left, drain {}",
                    self.tiles.len(),
                    tiles_to_string(&tiles)
                );
                self.place(&tiles);
            }
        }
        Ok(self.state())
    }

    /// Draw the tiles for `letters` and append them to the sequence.
    /// ## Errors
    /// - [`Error::InvalidLetter`] if `letters` has something else than `a..z`.
    /// - [`Error::DrawError`] if the bag runs out. Nothing is drawn in that case.
    pub fn play(&mut self, letters: &str) -> Result<(), Error> {
        if let Some(ch) = letters.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(Error::InvalidLetter(ch));
        }
        let letters = letters.to_ascii_uppercase();
        let tiles = self.bag.draw_word(&letters);
        if tiles.len() != letters.len() {
            self.bag.put_back_all(tiles.iter());
            return Err(Error::DrawError {
                expected: letters.len(),
                drawn: tiles.len(),
                extension: letters,
            });
        }
        self.place(&tiles);
        Ok(())
    }

    /// Append `tiles`, score the new words and prune what the bag can no longer spell.
    fn place(&mut self, tiles: &[Tile]) {
        let start = self.tiles.len();
        self.tiles.extend_from_slice(tiles);
        self.sequence.extend(tiles.iter().map(Tile::letter));
        let found = self.score_from(start);
        let pruned = self.index.retain_playable(&self.bag);
        log::debug!(
            "found {} words, pruned {}, {} live words, {} tiles left",
            found,
            pruned,
            self.index.live_count(),
            self.bag.len()
        );
    }

    /// Record every dictionary word that ends after `start` and was not found before.
    fn score_from(&mut self, start: usize) -> usize {
        let max_len = self.dictionary.max_len();
        let mut found = 0;
        for j in start + 1..=self.sequence.len() {
            for i in j.saturating_sub(max_len)..j {
                let word = &self.sequence[i..j];
                if self.ledger.contains(word) || !self.dictionary.contains(word) {
                    continue;
                }
                let score = self.tileset.tiles_points(&self.tiles[i..j]);
                self.ledger.record(i, word, score);
                self.index.prune(word);
                log::debug!("{} at {}: {}", word, i, score);
                found += 1;
            }
        }
        found
    }

    /// Step until the bag is empty, and return the result.
    /// ## Errors
    /// See [`step`](Solver::step).
    #[time]
    pub fn run(mut self) -> Result<Solution, Error> {
        while self.step()? == State::Building {}
        let solution = self.solution();
        log::info!("{} words, total {}", solution.finds.len(), solution.total);
        Ok(solution)
    }

    /// Snapshot of the current sequence and score.
    pub fn solution(&self) -> Solution {
        Solution {
            tiles: tiles_to_string(&self.tiles),
            sequence: self.sequence.clone(),
            total: self.ledger.total(),
            finds: self.ledger.finds(),
            leftover: self.bag.to_string(),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The letters spelled so far.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn index(&self) -> &IndexManager {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WordFile, WordSource};
    use anyhow::Result;
    use std::collections::{BTreeSet, HashSet};
    use std::path::PathBuf;

    const WORDS: &[&str] = &[
        "quiz", "zax", "jinx", "axe", "ox", "jo", "qi", "za", "the", "theme", "he", "retain",
        "retina", "train", "rain", "in", "at", "tea", "eat", "ate", "star", "rats", "arts",
        "tars", "sea", "oil", "lion", "loin", "noise", "dog", "god", "bed", "deb", "few", "woe",
        "yak", "vow", "mop", "cup", "puck",
    ];

    fn solver_for<'a>(dictionary: &'a Dictionary) -> Solver<'a> {
        Solver::new(TileSet::english(), dictionary, IndexManager::build(dictionary))
    }

    #[test]
    fn test_theme() -> Result<()> {
        let dictionary = Dictionary::from_words(&["he", "the", "them", "theme"], &TileSet::english())?;
        let mut solver = solver_for(&dictionary);
        solver.play("theme")?;
        let finds: Vec<(usize, &str)> = solver.ledger().iter().map(|(i, w, _)| (i, w)).collect();
        assert_eq!(finds, vec![(0, "THE"), (0, "THEM"), (0, "THEME"), (1, "HE")]);
        assert_eq!(solver.ledger().total(), 6 + 9 + 10 + 5);
        assert_eq!(solver.index().live_count(), 0);
        // every word is already found, nothing scores twice
        solver.play("THEME")?;
        assert_eq!(solver.sequence(), "THEMETHEME");
        assert_eq!(solver.ledger().len(), 4);
        assert_eq!(solver.ledger().total(), 30);
        Ok(())
    }

    #[test]
    fn test_first_extension_has_highest_potential() -> Result<()> {
        let dictionary = Dictionary::from_words(&["za", "zax"], &TileSet::english())?;
        let solver = solver_for(&dictionary);
        let expect = Extension {
            word: String::from("ZAX"),
            overlap: 0,
            potential: 30,
        };
        assert_eq!(solver.next(), Some(expect));
        Ok(())
    }

    #[test]
    fn test_tie_break_and_overlap() -> Result<()> {
        let dictionary = Dictionary::from_words(&["ab", "ba"], &TileSet::english())?;
        let mut solver = solver_for(&dictionary);
        // equal potential and length: word order decides
        assert_eq!(solver.next().map(|e| e.word), Some(String::from("AB")));
        assert_eq!(solver.step()?, State::Building);
        let next = solver.next().unwrap();
        assert_eq!((next.word.as_str(), next.overlap, next.letters()), ("BA", 1, "A"));
        solver.step()?;
        assert_eq!(solver.sequence(), "ABA");
        let finds: Vec<(usize, &str)> = solver.ledger().iter().map(|(i, w, _)| (i, w)).collect();
        assert_eq!(finds, vec![(0, "AB"), (1, "BA")]);
        assert_eq!(solver.next(), None);
        assert_eq!(solver.step()?, State::Done);
        assert_eq!(solver.tiles().len(), 100);
        assert_eq!(solver.ledger().total(), 8);
        Ok(())
    }

    #[test]
    fn test_run_uses_whole_bag() -> Result<()> {
        let tileset = TileSet::english();
        let dictionary = Dictionary::from_words(WORDS, &tileset)?;
        let mut solver = solver_for(&dictionary);
        while solver.state() == State::Building {
            solver.step()?;
            assert!(solver.index().is_consistent(solver.bag()));
            assert_eq!(solver.tiles().len() + solver.bag().len(), 100);
        }
        assert_eq!(solver.tiles().len(), 100);
        assert_eq!(TileBag::from_tiles(solver.tiles()), TileBag::from_tileset(&tileset));

        let solution = solver.solution();
        assert!(solution.leftover.is_empty());
        let total: u32 = solution.finds.iter().map(|find| find.score).sum();
        assert_eq!(total, solution.total);
        let mut seen = HashSet::new();
        for find in &solution.finds {
            assert!(seen.insert(find.word.clone()));
            assert!(dictionary.contains(&find.word));
            let end = find.offset + find.word.len();
            assert_eq!(&solution.sequence[find.offset..end], find.word);
            assert_eq!(find.score, tileset.tiles_points(&solver.tiles()[find.offset..end]));
        }
        Ok(())
    }

    #[test]
    fn test_every_word_in_sequence_is_scored() -> Result<()> {
        let tileset = TileSet::english();
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("wordlists/words.txt");
        let words = WordFile::new(path).words()?;
        let dictionary = Dictionary::build(&words, &tileset);
        let solution = solver_for(&dictionary).run()?;
        let sequence = solution.sequence.as_str();
        let mut present = BTreeSet::new();
        for i in 0..sequence.len() {
            for j in i + 1..=sequence.len() {
                if dictionary.contains(&sequence[i..j]) {
                    present.insert(&sequence[i..j]);
                }
            }
        }
        let found: BTreeSet<&str> = solution.finds.iter().map(|find| find.word.as_str()).collect();
        assert!(!present.is_empty());
        assert_eq!(present, found);
        Ok(())
    }

    #[test]
    fn test_pruned_word_scores_across_steps() -> Result<()> {
        let tileset = TileSet::english();
        let dictionary = Dictionary::from_words(&["qi"], &tileset)?;
        let mut solver = solver_for(&dictionary);
        // the Q and both blanks go to QQQ, so QI can no longer be drawn
        solver.play("ZQQ")?;
        assert!(solver.index().is_live("QI"));
        solver.play("Q")?;
        assert!(!solver.index().is_live("QI"));
        assert!(solver.ledger().is_empty());
        // the last (blank) Q and a new I still spell QI
        solver.play("I")?;
        assert_eq!(solver.sequence(), "ZQQQI");
        let finds: Vec<(usize, &str, u32)> = solver.ledger().iter().collect();
        assert_eq!(finds, vec![(3, "QI", 1)]);
        Ok(())
    }

    #[test]
    fn test_run_is_deterministic() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS, &TileSet::english())?;
        let first = solver_for(&dictionary).run()?;
        let second = solver_for(&dictionary).run()?;
        assert_eq!(first, second);
        assert!(first.to_string().starts_with(&format!("{} {}", first.tiles, first.total)));
        Ok(())
    }

    #[test]
    fn test_draw_error() -> Result<()> {
        let dictionary = Dictionary::from_words(&["qi"], &TileSet::english())?;
        let mut solver = solver_for(&dictionary);
        match solver.play("QQQQ") {
            Err(Error::DrawError { drawn, expected, .. }) => assert_eq!((drawn, expected), (3, 4)),
            other => panic!("expected draw error, got {:?}", other),
        }
        assert_eq!(solver.bag().len(), 100);
        assert!(solver.sequence().is_empty());
        assert!(matches!(solver.play("Q1"), Err(Error::InvalidLetter('1'))));
        Ok(())
    }
}
