use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::dictionary::get_user_dictionary_path;
use word_scramble::logging;
use word_scramble::wordbank::get_user_wordbank_path;
use word_scramble::{Game, LANGUAGE, Result, WordListDictionary, game_loop, load_wordbank};

/// The explicit path if given, otherwise the per-user file if it exists.
fn resolve_path(explicit: Option<PathBuf>, user: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| user.filter(|path| path.is_file()))
}

fn run() -> Result<()> {
    let cli = parse_cli();

    let wordbank_path = resolve_path(cli.wordbank_path, get_user_wordbank_path());
    let pool = load_wordbank(wordbank_path.as_deref());

    let dictionary = match resolve_path(cli.dictionary_path, get_user_dictionary_path()) {
        Some(path) => WordListDictionary::from_file(LANGUAGE, path)?,
        None => WordListDictionary::embedded(),
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut game = Game::new(pool, dictionary, rng)?;
    println!("Loaded {} words.", game.pool().len());
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(&mut game, &mut interface)
}

fn main() -> ExitCode {
    logging::init(LevelFilter::Warn);
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
