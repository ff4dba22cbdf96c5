//! A superstring scrabble solver for Rust.
//! <br>
//! Lay all 100 tiles of an english scrabble bag in one row, and score every
//! dictionary word that can be read anywhere in that row, once per word.
//! This crate builds such a row greedily: at every step it appends the word
//! that brings the most unscored words along, overlapping the end of the row
//! where it can.
//!
//! # How to use `superstring_solver`
//! Read a word list, score it against a full bag to get a [`Dictionary`],
//! build the [`IndexManager`] with the prefix, suffix and sub-word tables,
//! and run the [`Solver`]. The tables for a big word list take a while to
//! build, so they can be kept in a [`Cache`] directory between runs.
//!
//! # Basic usage
//! ```
//! use superstring_solver::{Dictionary, IndexManager, Solver, TileSet};
//!
//! let tileset = TileSet::english();
//! let dictionary = Dictionary::from_words(&["he", "the", "them", "theme", "za", "zax"], &tileset)?;
//! let index = IndexManager::build(&dictionary);
//! let solution = Solver::new(tileset, &dictionary, index).run()?;
//! assert_eq!(solution.tiles.len(), 100);
//! assert_eq!(solution.finds.len(), 6);
//! println!("{}", solution);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! Every word that has been scored, or that the remaining tiles can no longer
//! spell, is pruned from all tables at once. The potential of a candidate is
//! the sum of the scores of the live words inside it.
//!
mod cache;
mod chain;
mod config;
mod dictionary;
mod error;
mod index;
mod ledger;
mod solution;
mod solver;
mod tilebag;
mod tiles;
mod tileset;
mod wordlist;
mod xref;

pub use cache::{content_key, Cache};
pub use chain::{longest_chains, Chain};
pub use config::{default_cache_dir, Config};
pub use dictionary::Dictionary;
pub use error::Error;
pub use index::IndexManager;
pub use ledger::ScoreLedger;
pub use solution::{Find, Solution};
pub use solver::{Extension, Solver, State};
pub use tilebag::TileBag;
pub use tiles::{tiles_to_string, Code, Tile, Tiles};
pub use tileset::TileSet;
pub use wordlist::{parse_words, WordFile, WordSource};
pub use xref::{CrossReference, Side};
