use serde::Serialize;
use std::fmt;

/// A word found in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Find {
    /// start of the word in the sequence: 0..100
    pub offset: usize,
    /// word as String
    pub word: String,
    /// points of the tiles under the word
    pub score: u32,
}

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// tile faces, with `_` for blanks
    pub tiles: String,
    /// the letters spelled by the tiles
    pub sequence: String,
    /// sum of the scores of all finds
    pub total: u32,
    /// found words, by offset, longest first
    pub finds: Vec<Find>,
    /// tiles still in the bag, normally none
    pub leftover: String,
}

impl Solution {
    /// The letters of the blanks, aligned under the tiles. As wide as the
    /// sequence, spaces under regular tiles.
    pub fn subheader(&self) -> String {
        self.tiles
            .chars()
            .zip(self.sequence.chars())
            .map(|(face, letter)| if face != letter { letter } else { ' ' })
            .collect()
    }
}

/// Display the tile sequence with the total score, the letters assigned to
/// blanks, and every found word aligned under its position.
///
/// ```text
/// TH_ME 26
///   E
/// -----
/// THEME 9
/// THEM  8
/// THE   5
///  HE   4
/// ```
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.tiles.len();
        write!(f, "{} {}", self.tiles, self.total)?;
        write!(f, "\n{}", self.subheader())?;
        write!(f, "\n{}", "-".repeat(width))?;
        for find in &self.finds {
            write!(
                f,
                "\n{:indent$}{:<width$} {}",
                "",
                find.word,
                find.score,
                indent = find.offset,
                width = width.saturating_sub(find.offset)
            )?;
        }
        if !self.leftover.is_empty() {
            write!(f, "\nRemaining: {}", self.leftover)?;
        }
        Ok(())
    }
}
