use crate::dictionary::DictionaryChecker;
use crate::error::Result;
use crate::round::RoundState;
use crate::validator::{Verdict, validate};
use crate::{debug_log, info_log};
use rand::Rng;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Restart,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
pub trait GameInterface {
    /// `None` means the input could not be used and should be asked for again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn on_round_start(&mut self, round: &RoundState);
    fn on_word_accepted(&mut self, word: &str, round: &RoundState);
    fn on_word_rejected(&mut self, verdict: &Verdict);
    fn on_exit(&mut self);
}

/// Owns the word pool, the dictionary and the active round.
pub struct Game<D, R> {
    pool: Vec<String>,
    dictionary: D,
    rng: R,
    round: RoundState,
}

impl<D: DictionaryChecker, R: Rng> Game<D, R> {
    pub fn new(pool: Vec<String>, dictionary: D, mut rng: R) -> Result<Self> {
        let round = RoundState::new(&pool, &mut rng)?;
        Ok(Self {
            pool,
            dictionary,
            rng,
            round,
        })
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Validates the lowercased `text` and records it if accepted.
    pub fn submit(&mut self, text: &str) -> Verdict {
        let word = text.to_lowercase();
        let verdict = validate(&word, &self.round, &self.dictionary);
        debug_log!("submit('{}') -> {:?}", word, verdict);
        if verdict.is_accepted() {
            self.round.accept(word);
        }
        verdict
    }

    pub fn restart(&mut self) -> Result<&RoundState> {
        self.round.start(&self.pool, &mut self.rng)?;
        Ok(&self.round)
    }
}

/// Runs rounds until the interface asks to exit.
pub fn game_loop<D, R, I>(game: &mut Game<D, R>, interface: &mut I) -> Result<()>
where
    D: DictionaryChecker,
    R: Rng,
    I: GameInterface + ?Sized,
{
    interface.on_round_start(game.round());

    loop {
        let action = match interface.read_action() {
            Some(action) => action,
            None => continue,
        };

        match action {
            UserAction::Exit => {
                info_log!("Exit requested");
                interface.on_exit();
                return Ok(());
            }
            UserAction::Restart => {
                let round = game.restart()?;
                interface.on_round_start(round);
            }
            UserAction::Submit(text) => {
                let verdict = game.submit(&text);
                match &verdict {
                    Verdict::Accepted { word } => interface.on_word_accepted(word, game.round()),
                    _ => interface.on_word_rejected(&verdict),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{LANGUAGE, WordListDictionary};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    enum Event {
        RoundStart(String),
        Accepted(String, Vec<String>),
        Rejected(Verdict),
        Exit,
    }

    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        events: Vec<Event>,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                events: Vec::new(),
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn on_round_start(&mut self, round: &RoundState) {
            self.events.push(Event::RoundStart(round.base_word().to_string()));
        }

        fn on_word_accepted(&mut self, word: &str, round: &RoundState) {
            self.events
                .push(Event::Accepted(word.to_string(), round.accepted_words().to_vec()));
        }

        fn on_word_rejected(&mut self, verdict: &Verdict) {
            self.events.push(Event::Rejected(verdict.clone()));
        }

        fn on_exit(&mut self) {
            self.events.push(Event::Exit);
        }
    }

    fn silkworm_game() -> Game<WordListDictionary, StdRng> {
        let dictionary = WordListDictionary::from_str(LANGUAGE, "silk\nworm\nmilk\nsilkworm");
        Game::new(vec!["silkworm".to_string()], dictionary, StdRng::seed_from_u64(0)).unwrap()
    }

    fn submit(word: &str) -> Option<UserAction> {
        Some(UserAction::Submit(word.to_string()))
    }

    #[test]
    fn test_new_game_with_empty_pool_fails() {
        let dictionary = WordListDictionary::from_str(LANGUAGE, "");
        assert!(Game::new(Vec::new(), dictionary, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_submit_lowercases_and_records() {
        let mut game = silkworm_game();
        let verdict = game.submit("SILK");
        assert_eq!(verdict, Verdict::Accepted { word: "silk".to_string() });
        assert_eq!(game.round().accepted_words(), ["silk".to_string()]);
    }

    #[test]
    fn test_second_submit_is_not_original() {
        let mut game = silkworm_game();
        assert!(game.submit("silk").is_accepted());
        assert!(matches!(
            game.submit("silk"),
            Verdict::RejectedNotOriginal { .. }
        ));
        assert_eq!(game.round().accepted_words().len(), 1);
    }

    #[test]
    fn test_rejection_leaves_round_unchanged() {
        let mut game = silkworm_game();
        let before = game.round().clone();
        assert!(!game.submit("zworm").is_accepted());
        assert!(!game.submit("silkworm").is_accepted());
        assert_eq!(game.round(), &before);
    }

    #[test]
    fn test_restart_allows_word_again() {
        let mut game = silkworm_game();
        assert!(game.submit("silk").is_accepted());
        let round = game.restart().unwrap();
        assert_eq!(round.base_word(), "silkworm");
        assert!(round.accepted_words().is_empty());
        assert!(game.submit("silk").is_accepted());
    }

    #[test]
    fn test_game_loop_reports_events() {
        let mut game = silkworm_game();
        let mut interface = ScriptedInterface::new(vec![
            submit("silk"),
            None,
            submit("worm"),
            submit("silk"),
            Some(UserAction::Restart),
            submit("silk"),
            Some(UserAction::Exit),
        ]);

        game_loop(&mut game, &mut interface).unwrap();

        assert_eq!(
            interface.events,
            vec![
                Event::RoundStart("silkworm".to_string()),
                Event::Accepted("silk".to_string(), vec!["silk".to_string()]),
                Event::Accepted(
                    "worm".to_string(),
                    vec!["worm".to_string(), "silk".to_string()]
                ),
                Event::Rejected(Verdict::RejectedNotOriginal {
                    word: "silk".to_string(),
                    base_word: "silkworm".to_string(),
                }),
                Event::RoundStart("silkworm".to_string()),
                Event::Accepted("silk".to_string(), vec!["silk".to_string()]),
                Event::Exit,
            ]
        );
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut game = silkworm_game();
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut game, &mut interface).unwrap();
        assert_eq!(
            interface.events,
            vec![Event::RoundStart("silkworm".to_string()), Event::Exit]
        );
    }
}
