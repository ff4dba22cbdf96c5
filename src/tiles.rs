//! Basic types for working with scrabble tiles.
mod codes;
mod list;
mod tile;

pub use codes::{Code, BLANK};
pub use list::{tiles_to_string, Tiles};
pub use tile::Tile;
