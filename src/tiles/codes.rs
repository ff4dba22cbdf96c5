/// Tile code: the ASCII letter on the face of a tile, see [`Tile`](crate::Tile).
pub type Code = u8;

/// code for an unassigned BLANK tile
pub const BLANK: Code = b'_';

/// bitflag for a blank that has been assigned a letter
pub const IS_WILDCARD: Code = 0x80;

/// Mask to get the ASCII face of a tile
pub const LETTER_MASK: Code = 0x7f;
