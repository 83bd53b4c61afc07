use crate::error::{GameError, Result};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/start.txt");

/// The only word guaranteed to be playable, used when no list can be loaded.
pub const DEFAULT_WORD: &str = "silkworm";

const APP_DIR: &str = "word-scramble";
const WORDBANK_FILE: &str = "start.txt";

pub fn default_wordbank() -> Vec<String> {
    vec![DEFAULT_WORD.to_string()]
}

fn parse_line(line: &str) -> Option<String> {
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_string())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Loads the pool of base words, from `path` if given or the embedded list otherwise.
///
/// Never fails: an unreadable file or a list without any words degrades to
/// [`default_wordbank`], so the returned pool always has at least one word.
pub fn load_wordbank(path: Option<&Path>) -> Vec<String> {
    let words = match path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => {
                info_log!("Loaded {} words from {}", words.len(), path.display());
                words
            }
            Err(e) => {
                log::warn!(
                    "Failed to load word list from '{}': {e}; using default word",
                    path.display()
                );
                return default_wordbank();
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };

    if words.is_empty() {
        log::warn!("Word list contains no words; using default word");
        return default_wordbank();
    }
    words
}

/// Chooses one base word uniformly at random.
pub fn pick_random<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> Result<&'a str> {
    let word = pool.choose(rng).ok_or(GameError::EmptyWordPool)?;
    debug_log!("Picked '{}' from a pool of {} words", word, pool.len());
    Ok(word.as_str())
}

/// Per-user start-word list, `<config dir>/word-scramble/start.txt`.
pub fn get_user_wordbank_path() -> Option<PathBuf> {
    user_config_file(WORDBANK_FILE)
}

pub(crate) fn user_config_file(name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(name))
}
