use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use superstring_solver::{
    longest_chains, Cache, Config, Dictionary, IndexManager, Solver, TileSet, WordFile,
    WordSource,
};

#[derive(Parser)]
#[command(
    name = "superstring",
    about = "Lay the 100 tiles of a scrabble bag in one row and score every word in it",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line [default: $SUPERSTRING_WORDLIST or wordlists/words.txt]
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for the word scores and cross references [default: $SUPERSTRING_CACHE_DIR]
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Always build the tables, do not read or write the cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// More logging, repeat for more
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the greedy solver and print the solution
    Solve {
        /// Print the solution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the longest word chains
    Chain,

    /// List the words that extend a fragment
    Lookup {
        /// Start (or end) of the words
        fragment: String,

        /// List the words that end with the fragment
        #[arg(long)]
        suffix: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Read the word list and get the dictionary and index, from the cache if possible.
fn load(config: &Config, tileset: &TileSet) -> Result<(Dictionary, IndexManager)> {
    let words = WordFile::new(&config.wordlist)
        .words()
        .with_context(|| format!("can not load word list {}", config.wordlist.display()))?;
    let cache = config
        .cache_dir
        .as_ref()
        .map(|dir| Cache::for_words(dir, &words, tileset));
    let dictionary = Dictionary::load_or_build(&words, tileset, cache.as_ref())?;
    log::info!("{}", dictionary);
    let index = IndexManager::load_or_build(&dictionary, cache.as_ref())?;
    Ok((dictionary, index))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::from_env()
        .with_wordlist(cli.wordlist)
        .with_cache_dir(cli.cache_dir, cli.no_cache);
    let tileset = TileSet::english();
    let now = Instant::now();
    let (dictionary, index) = load(&config, &tileset)?;
    log::info!("loading took {:.2} s", now.elapsed().as_secs_f32());

    match cli.command {
        Commands::Solve { json } => {
            let solution = Solver::new(tileset, &dictionary, index).run()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                println!("{}", solution);
            }
        }
        Commands::Chain => {
            for chain in longest_chains(&tileset, &dictionary, &index) {
                println!("{}", chain);
            }
        }
        Commands::Lookup { fragment, suffix } => {
            let fragment = fragment.to_ascii_uppercase();
            let words: Vec<&str> = if suffix {
                index.ending_with(&fragment).collect()
            } else {
                index.extending(&fragment).collect()
            };
            for word in &words {
                println!("{} {}", word, index.score(word).unwrap_or(0));
            }
            eprintln!("{} words", words.len());
        }
    }
    Ok(())
}
