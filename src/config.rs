//! Settings read from the environment.
//!
//! `SUPERSTRING_WORDLIST` names the word list, `SUPERSTRING_CACHE_DIR` the
//! cache directory, and a non-empty `SUPERSTRING_NO_CACHE` (other than `0`)
//! turns the cache off. Command line flags override all of them.

use std::path::PathBuf;

pub const WORDLIST_VAR: &str = "SUPERSTRING_WORDLIST";
pub const CACHE_DIR_VAR: &str = "SUPERSTRING_CACHE_DIR";
pub const NO_CACHE_VAR: &str = "SUPERSTRING_NO_CACHE";

/// Word list used when nothing else is given.
pub const DEFAULT_WORDLIST: &str = "wordlists/words.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wordlist: PathBuf,
    /// `None` when caching is off.
    pub cache_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            cache_dir: Some(default_cache_dir()),
        }
    }
}

/// `<temp dir>/superstring`
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("superstring")
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut config = Config::default();
        if let Some(path) = set(WORDLIST_VAR) {
            config.wordlist = PathBuf::from(path);
        }
        if let Some(dir) = set(CACHE_DIR_VAR) {
            config.cache_dir = Some(PathBuf::from(dir));
        }
        if set(NO_CACHE_VAR).map_or(false, |value| value != "0") {
            config.cache_dir = None;
        }
        log::debug!("{:?}", config);
        config
    }

    /// Override the word list.
    pub fn with_wordlist(mut self, path: Option<PathBuf>) -> Config {
        if let Some(path) = path {
            self.wordlist = path;
        }
        self
    }

    /// Override the cache directory, or turn the cache off.
    pub fn with_cache_dir(mut self, dir: Option<PathBuf>, no_cache: bool) -> Config {
        if let Some(dir) = dir {
            self.cache_dir = Some(dir);
        }
        if no_cache {
            self.cache_dir = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (String::from(k), String::from(v)))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.wordlist, PathBuf::from(DEFAULT_WORDLIST));
        assert_eq!(config.cache_dir, Some(default_cache_dir()));
        // the default list ships with the crate
        let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_WORDLIST);
        assert!(shipped.is_file());
    }

    #[test]
    fn test_env() {
        let config = config(&[(WORDLIST_VAR, "words.txt"), (CACHE_DIR_VAR, "/var/cache/ss")]);
        assert_eq!(config.wordlist, PathBuf::from("words.txt"));
        assert_eq!(config.cache_dir, Some(PathBuf::from("/var/cache/ss")));
        assert_eq!(config.clone(), config.with_wordlist(None).with_cache_dir(None, false));
    }

    #[test]
    fn test_no_cache() {
        assert_eq!(config(&[(NO_CACHE_VAR, "1")]).cache_dir, None);
        assert!(config(&[(NO_CACHE_VAR, "0")]).cache_dir.is_some());
        assert!(config(&[(NO_CACHE_VAR, "")]).cache_dir.is_some());
    }

    #[test]
    fn test_flags_override_env() {
        let config = config(&[(WORDLIST_VAR, "words.txt")])
            .with_wordlist(Some(PathBuf::from("other.txt")))
            .with_cache_dir(Some(PathBuf::from("cache")), true);
        assert_eq!(config.wordlist, PathBuf::from("other.txt"));
        assert_eq!(config.cache_dir, None);
    }
}
