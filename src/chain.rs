use crate::{Dictionary, IndexManager, TileBag, TileSet};
use logging_timer::time;
use std::collections::BTreeMap;
use std::fmt;

/// A word grown one tile at a time, every intermediate being a word.
#[derive(Debug, Clone)]
pub struct Chain {
    word: String,
    steps: Vec<String>,
    bag: TileBag,
}

impl Chain {
    fn start(word: &str, bag: TileBag) -> Chain {
        Chain {
            word: String::from(word),
            steps: vec![String::from(word)],
            bag,
        }
    }

    /// Grow to `word`, which is the current word with one letter added at
    /// the front or at the back. Returns `None` if the bag runs out.
    fn grow(&self, word: &str) -> Option<Chain> {
        let (letter, step) = if word.starts_with(self.word.as_str()) {
            let letter = &word[self.word.len()..];
            (letter, format!("{}+{}", self.word, letter))
        } else {
            let letter = &word[..1];
            (letter, format!("{}+{}", letter, self.word))
        };
        let mut bag = self.bag.clone();
        bag.draw(letter.as_bytes()[0])?;
        let mut steps = self.steps.clone();
        steps.push(step);
        Some(Chain {
            word: String::from(word),
            steps,
            bag,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word at every level: the start word, then `T+HE`, `THE+M` style steps.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Tiles left after drawing the word.
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }
}

/// `THEME [HE, T+HE, THE+M, THEM+E]`
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.word, self.steps.join(", "))
    }
}

/// Grow every two letter word, a tile at a time on either side, and return
/// the chains that reach the longest words.
/// ## Examples
/// ```
/// # use superstring_solver::{longest_chains, Dictionary, Error, IndexManager, TileSet};
/// let tileset = TileSet::english();
/// let dictionary = Dictionary::from_words(&["he", "the", "them", "theme", "themes"], &tileset)?;
/// let index = IndexManager::build(&dictionary);
/// let chains = longest_chains(&tileset, &dictionary, &index);
/// assert_eq!(chains[0].to_string(), "THEMES [HE, T+HE, THE+M, THEM+E, THEME+S]");
/// # Ok::<(), Error>(())
/// ```
#[time]
pub fn longest_chains(tileset: &TileSet, dictionary: &Dictionary, index: &IndexManager) -> Vec<Chain> {
    let full = TileBag::from_tileset(tileset);
    let mut level: Vec<Chain> = dictionary
        .iter()
        .filter(|(word, _)| word.len() == 2)
        .filter_map(|(word, _)| {
            let mut bag = full.clone();
            let drawn = bag.draw_word(word);
            if drawn.len() == word.len() {
                Some(Chain::start(word, bag))
            } else {
                None
            }
        })
        .collect();
    let mut length = 2;
    loop {
        log::info!("{} chains of length {}", level.len(), length);
        let mut next: BTreeMap<String, Chain> = BTreeMap::new();
        for chain in &level {
            let candidates = index
                .extending(&chain.word)
                .chain(index.ending_with(&chain.word))
                .filter(|word| word.len() == length + 1);
            for word in candidates {
                if next.contains_key(word) {
                    continue;
                }
                if let Some(grown) = chain.grow(word) {
                    next.insert(String::from(word), grown);
                }
            }
        }
        if next.is_empty() {
            return level;
        }
        level = next.into_iter().map(|(_, chain)| chain).collect();
        length += 1;
    }
}
