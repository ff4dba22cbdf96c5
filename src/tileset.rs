use crate::tiles::{Code, Tile, BLANK};
use std::fmt;

/// label, count, points
type TileInfo = (Code, u32, u32);

/// The english scrabble distribution: 98 letters and two blanks.
const ENGLISH: &[TileInfo] = &[
    (b'A', 9, 1),
    (b'B', 2, 3),
    (b'C', 2, 3),
    (b'D', 4, 2),
    (b'E', 12, 1),
    (b'F', 2, 4),
    (b'G', 3, 2),
    (b'H', 2, 4),
    (b'I', 9, 1),
    (b'J', 1, 8),
    (b'K', 1, 5),
    (b'L', 4, 1),
    (b'M', 2, 3),
    (b'N', 6, 1),
    (b'O', 8, 1),
    (b'P', 2, 3),
    (b'Q', 1, 10),
    (b'R', 6, 1),
    (b'S', 4, 1),
    (b'T', 6, 1),
    (b'U', 4, 1),
    (b'V', 2, 4),
    (b'W', 2, 4),
    (b'X', 1, 8),
    (b'Y', 2, 4),
    (b'Z', 1, 10),
    (BLANK, 2, 0),
];

/// The tile distribution of a scrabble bag: how many tiles of each letter,
/// and what each of them is worth.
#[derive(Debug, Clone, Copy)]
pub struct TileSet {
    tiles: &'static [TileInfo],
}

impl Default for TileSet {
    fn default() -> Self {
        Self::english()
    }
}

impl TileSet {
    /// The standard 100 tile english set.
    pub fn english() -> TileSet {
        TileSet { tiles: ENGLISH }
    }

    fn info(&self, code: Code) -> Option<&TileInfo> {
        self.tiles.iter().find(|info| info.0 == code)
    }

    /// Return the number of tiles with this code in tileset, or 0 if not found
    pub fn count(&self, code: Code) -> u32 {
        self.info(code).map_or(0, |info| info.1)
    }

    /// Return the points for a letter code, or 0 if not found
    pub fn letter_points(&self, code: Code) -> u32 {
        self.info(code).map_or(0, |info| info.2)
    }

    /// Return the points for a placed tile. A wildcard is worth nothing.
    pub fn points(&self, tile: Tile) -> u32 {
        if tile.is_wildcard() {
            0
        } else {
            self.letter_points(tile.label())
        }
    }

    /// Sum of the points of `tiles`.
    pub fn tiles_points<'a, I>(&self, tiles: I) -> u32
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        tiles.into_iter().map(|&tile| self.points(tile)).sum()
    }

    /// Total number of tiles in a full bag.
    pub fn size(&self) -> usize {
        self.tiles.iter().map(|info| info.1 as usize).sum()
    }

    /// Iterate over `(code, count, points)`.
    pub fn iter(&self) -> impl Iterator<Item = (Code, u32, u32)> + '_ {
        self.tiles.iter().copied()
    }
}

/// One `letter:count:points` triple per tile kind, e.g. `A:9:1 B:2:3 ...`.
/// Used as part of the cache key.
impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .iter()
            .map(|(code, count, points)| format!("{}:{}:{}", char::from(code), count, points))
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", repr)
    }
}
