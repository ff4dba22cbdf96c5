use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile or cache file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing a cache file
    #[error("Cache file \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// A word in the wordfile contains something else than `a..z`
    #[error("Wordfile \"{path}\" line {line}: invalid word \"{word}\"")]
    InvalidWord {
        path: String,
        line: usize,
        word: String,
    },

    /// A line in a cache file can not be parsed
    #[error("Cache file \"{path}\" line {line}: {reason}")]
    CacheParseError {
        path: String,
        line: usize,
        reason: String,
    },

    /// Character is not a letter or blank
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// The tiles for a playable word could not be drawn from the bag
    #[error("Drew {drawn} of {expected} tiles for \"{extension}\"")]
    DrawError {
        extension: String,
        drawn: usize,
        expected: usize,
    },
}
