use crate::tiles::{tiles_to_string, Code, Tile, Tiles, BLANK};
use crate::TileSet;
use multiset::HashMultiSet;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

/// Keeps track of the tiles that have not been drawn yet.
///
/// The bag holds tile faces: `A..Z` and `_` for blanks. Drawing a letter
/// takes the matching tile if there is one, and otherwise locks a blank to
/// that letter.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Code>);

impl Deref for TileBag {
    type Target = HashMultiSet<Code>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Multiset equality: same faces, same counts.
impl PartialEq for TileBag {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.counts() == other.counts()
    }
}

impl Eq for TileBag {}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBag {
    /// An empty bag
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A full bag for `tileset`.
    pub fn from_tileset(tileset: &TileSet) -> Self {
        let mut bag = HashMultiSet::new();
        for (code, count, _points) in tileset.iter() {
            if count > 0 {
                bag.insert_times(code, count as usize);
            }
        }
        Self(bag)
    }

    /// A bag holding exactly the faces of `tiles`.
    pub fn from_tiles<'a, I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        let mut bag = HashMultiSet::new();
        for tile in tiles {
            bag.insert(tile.face());
        }
        Self(bag)
    }

    /// Number of tiles per face, in face order.
    pub fn counts(&self) -> BTreeMap<Code, usize> {
        let mut counts = BTreeMap::new();
        for &code in self.0.iter() {
            *counts.entry(code).or_insert(0) += 1;
        }
        counts
    }

    /// Draw one tile to spell `letter`: the letter itself if available,
    /// otherwise a blank locked to `letter`. Returns `None` if neither is left.
    pub fn draw(&mut self, letter: Code) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        if letter != BLANK && self.0.remove(&letter) {
            Some(Tile::from_letter(letter))
        } else if self.0.remove(&BLANK) {
            if letter == BLANK {
                Some(Tile::blank())
            } else {
                Some(Tile::wildcard_from_letter(letter))
            }
        } else {
            None
        }
    }

    /// Draw the tiles for `word`, one letter at a time, and stop at the first
    /// letter that can not be drawn. The caller checks the length of the result.
    pub fn draw_word(&mut self, word: &str) -> Tiles {
        let mut tiles = Tiles::new();
        for letter in word.bytes() {
            match self.draw(letter) {
                Some(tile) => tiles.push(tile),
                None => break,
            }
        }
        tiles
    }

    /// Put a tile back. A wildcard goes back as a blank.
    pub fn put_back(&mut self, tile: Tile) {
        self.0.insert(tile.face());
    }

    /// Put all `tiles` back.
    pub fn put_back_all<'a, I>(&mut self, tiles: I)
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        for &tile in tiles {
            self.put_back(tile);
        }
    }

    /// Check if `word` can be spelled from the tiles in the bag, using blanks
    /// for any letters that are short. Does not change the bag.
    pub fn can_spell(&self, word: &str) -> bool {
        let mut needed: BTreeMap<Code, usize> = BTreeMap::new();
        for letter in word.bytes() {
            *needed.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
        }
        let short: usize = needed
            .iter()
            .map(|(code, &n)| n.saturating_sub(self.0.count_of(code)))
            .sum();
        short <= self.0.count_of(&BLANK)
    }

    /// The remaining tiles in bag order: letters ascending, blanks last.
    pub fn remaining(&self) -> Vec<Tile> {
        let mut codes: Vec<Code> = self.0.iter().copied().collect();
        codes.sort_unstable();
        codes
            .into_iter()
            .map(|code| {
                if code == BLANK {
                    Tile::blank()
                } else {
                    Tile::from_letter(code)
                }
            })
            .collect()
    }

    /// Take every remaining tile out of the bag, in bag order.
    pub fn drain(&mut self) -> Vec<Tile> {
        let tiles = self.remaining();
        self.0 = HashMultiSet::new();
        tiles
    }
}

impl<'a> From<&'a TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        TileBag::from_tileset(tileset)
    }
}

/// Remaining tiles in bag order, blanks as `_`.
impl fmt::Display for TileBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", tiles_to_string(&self.remaining()))
    }
}
