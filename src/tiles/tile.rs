use super::codes::{Code, BLANK, IS_WILDCARD, LETTER_MASK};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A tile in the sequence, either a regular letter or a wildcard (blank used as letter).
///
/// The code is the ASCII letter `A..Z`, or `_` for a blank. A blank that is
/// locked to a letter keeps that letter with the [`IS_WILDCARD`] bit set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(Code);

impl Default for Tile {
    fn default() -> Self {
        Self::blank()
    }
}

impl Tile {
    /// Return a regular tile for letter `code`.
    /// ## Example
    /// ```
    /// use superstring_solver::Tile;
    /// let tile = Tile::from_letter(b'Q');
    /// assert_eq!(tile.letter(), 'Q');
    /// assert!(!tile.is_wildcard());
    /// ```
    pub fn from_letter(code: Code) -> Tile {
        Tile(code & LETTER_MASK)
    }

    /// Return an unassigned blank tile.
    pub fn blank() -> Tile {
        Tile(BLANK | IS_WILDCARD)
    }

    /// Return a blank tile locked to letter `code`.
    /// ## Example
    /// ```
    /// use superstring_solver::Tile;
    /// let tile = Tile::wildcard_from_letter(b'C');
    /// assert_eq!(tile.letter(), 'C');
    /// assert!(tile.is_wildcard());
    /// assert_eq!(tile.to_string(), "_");
    /// ```
    pub fn wildcard_from_letter(code: Code) -> Tile {
        Tile((code & LETTER_MASK) | IS_WILDCARD)
    }

    /// The raw code, including the wildcard flag.
    pub fn code(&self) -> Code {
        self.0
    }

    /// Get the letter code for the tile, ignoring the wildcard attribute.
    pub fn label(&self) -> Code {
        self.0 & LETTER_MASK
    }

    /// The letter this tile spells in the sequence.
    pub fn letter(&self) -> char {
        char::from(self.label())
    }

    /// Check if the tile is a blank, assigned or not.
    pub fn is_wildcard(&self) -> bool {
        self.0 & IS_WILDCARD != 0
    }

    /// Check if the tile is a blank that was never assigned a letter.
    pub fn is_unassigned(&self) -> bool {
        self.label() == BLANK
    }

    /// The code of the tile as it sits in the bag: blanks go back as `_`.
    pub fn face(&self) -> Code {
        if self.is_wildcard() {
            BLANK
        } else {
            self.label()
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_uppercase() {
            up @ 'A'..='Z' => Ok(Tile::from_letter(up as Code)),
            '_' => Ok(Tile::blank()),
            _ => Err(Error::InvalidLetter(ch)),
        }
    }
}

/// Display the tile face: the letter, or `_` for a blank.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(self.face()))
    }
}
