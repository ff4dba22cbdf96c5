use super::Tile;
use tinyvec::TinyVec;

/// A short run of tiles, e.g. the tiles drawn for one extension.
/// Stays inline up to 16 tiles.
pub type Tiles = TinyVec<[Tile; 16]>;

/// Show tile faces, with `_` for blanks.
pub fn tiles_to_string<'a, I>(tiles: I) -> String
where
    I: IntoIterator<Item = &'a Tile>,
{
    tiles.into_iter().map(Tile::to_string).collect()
}
