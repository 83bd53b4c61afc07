use crate::debug_log;
use crate::game_state::{GameInterface, UserAction};
use crate::round::RoundState;
use crate::validator::Verdict;
use clap::Parser;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::PathBuf;

const RESTART_COMMAND: &str = ":restart";
const EXIT_COMMANDS: [&str; 2] = [":quit", ":exit"];

/// Word Scramble: make words from the letters of a base word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of base words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Path to a newline-delimited list of valid English words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for choosing base words, for repeatable games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Maps one line of input to an action; anything that is not a command is an answer.
pub fn parse_action(line: &str) -> UserAction {
    let input = line.trim();
    let command = input.to_lowercase();

    if command == RESTART_COMMAND {
        UserAction::Restart
    } else if EXIT_COMMANDS.contains(&command.as_str()) {
        UserAction::Exit
    } else {
        UserAction::Submit(input.to_string())
    }
}

pub fn display_round(round: &RoundState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nYour word is: {}", round.base_word())?;
    if round.accepted_words().is_empty() {
        writeln!(out, "No answers yet.")?;
    } else {
        writeln!(out, "Answers ({}):", round.accepted_words().len())?;
        for word in round.accepted_words() {
            writeln!(out, "  {word}")?;
        }
    }
    Ok(())
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and a writer for prompts and results
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    output_failed: bool,
}

impl<R: BufRead> CliInterface<R, io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            output_failed: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Warns about the first failed write only; the game keeps running without output.
    fn check_output(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && !self.output_failed
        {
            log::warn!("Failed to write game output: {e}");
            self.output_failed = true;
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_action(&mut self) -> Option<UserAction> {
        let prompt = writeln!(
            self.writer,
            "\nEnter an answer ('{RESTART_COMMAND}' for a new word, ':quit' to exit):"
        )
        .and_then(|()| self.writer.flush());
        self.check_output(prompt);

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => Some(parse_action(&input)),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log::warn!("Ignoring input line: {e}");
                let notice = writeln!(self.writer, "That line was not valid text, try again.");
                self.check_output(notice);
                None
            }
            Err(e) => {
                log::warn!("Failed to read input, ending game: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn on_round_start(&mut self, round: &RoundState) {
        let result = display_round(round, &mut self.writer);
        self.check_output(result);
    }

    fn on_word_accepted(&mut self, word: &str, round: &RoundState) {
        let verdict = Verdict::Accepted {
            word: word.to_string(),
        };
        debug_log!("on_word_accepted() - {}", verdict);
        let result = writeln!(self.writer, "{verdict}")
            .and_then(|()| display_round(round, &mut self.writer));
        self.check_output(result);
    }

    fn on_word_rejected(&mut self, verdict: &Verdict) {
        let result = writeln!(self.writer, "{verdict}");
        self.check_output(result);
    }

    fn on_exit(&mut self) {
        let result = writeln!(self.writer, "Exiting.");
        self.check_output(result);
    }
}
