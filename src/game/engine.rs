use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::{
    dictionary::WordBank,
    error::EngineError,
    game::{GuessValidator, Scorer, Scrambler, StateObserver},
    models::{GameRules, GameSnapshot, RoundState},
};

/// Single-player unscramble game.
///
/// Owns the word bank, the round state and the random source. Every command
/// runs to completion before observers are notified, so a published
/// [`GameSnapshot`] is never a half-applied state.
pub struct GameEngine {
    bank: WordBank,
    rules: GameRules,
    scorer: Scorer,
    state: RoundState,
    rng: StdRng,
    observers: Vec<Box<dyn StateObserver>>,
}

impl GameEngine {
    /// Create an engine seeded from OS entropy and start the first round
    pub fn new(bank: WordBank, rules: GameRules) -> Result<Self, EngineError> {
        Self::start(bank, rules, StdRng::from_os_rng())
    }

    /// Create an engine whose word order and scrambles are reproducible
    pub fn with_seed(bank: WordBank, rules: GameRules, seed: u64) -> Result<Self, EngineError> {
        Self::start(bank, rules, StdRng::seed_from_u64(seed))
    }

    /// Create an engine around an already prepared round.
    ///
    /// No word is picked; `state` is taken as the active turn.
    pub fn from_state(
        bank: WordBank,
        rules: GameRules,
        state: RoundState,
        seed: Option<u64>,
    ) -> Result<Self, EngineError> {
        Self::validate(&bank, &rules)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::assemble(bank, rules, state, rng))
    }

    fn start(bank: WordBank, rules: GameRules, rng: StdRng) -> Result<Self, EngineError> {
        Self::validate(&bank, &rules)?;
        let mut engine = Self::assemble(bank, rules, RoundState::fresh(), rng);
        engine.begin_round();
        Ok(engine)
    }

    fn assemble(bank: WordBank, rules: GameRules, state: RoundState, rng: StdRng) -> Self {
        Self {
            scorer: Scorer::new(rules.score_increase),
            bank,
            rules,
            state,
            rng,
            observers: Vec::new(),
        }
    }

    fn validate(bank: &WordBank, rules: &GameRules) -> Result<(), EngineError> {
        if bank.is_empty() {
            return Err(EngineError::EmptyWordBank);
        }
        if rules.max_words == 0 {
            return Err(EngineError::InvalidMaxWords);
        }
        if rules.max_words > bank.len() {
            return Err(EngineError::NotEnoughWords {
                required: rules.max_words,
                available: bank.len(),
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &RoundState {
        &self.state
    }

    /// Current state as the UI may see it
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(&self.rules)
    }

    /// Register an observer, notified after every command
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the typed guess. No validation happens here.
    pub fn update_guess(&mut self, text: impl Into<String>) {
        self.state.current_guess = text.into();
        self.publish();
    }

    /// Compare the typed guess with the answer.
    ///
    /// A match scores and moves to the next turn. A mismatch only flags the
    /// guess as wrong and keeps the typed text. Ignored once the round is over.
    pub fn check_guess(&mut self) {
        if self.state.is_game_over {
            tracing::warn!("Ignoring guess check after game over");
        } else if GuessValidator::matches(&self.state.current_guess, &self.state.current_word) {
            self.state.score = self.scorer.award(self.state.score);
            self.state.is_guess_wrong = false;
            self.state.current_guess.clear();
            tracing::debug!(
                "Correct guess on turn {}, score is now {}",
                self.state.word_count,
                self.state.score
            );
            self.advance_turn();
        } else {
            self.state.is_guess_wrong = true;
            tracing::debug!("Wrong guess on turn {}", self.state.word_count);
        }
        self.publish();
    }

    /// Move to the next turn without scoring. Ignored once the round is over.
    pub fn skip_word(&mut self) {
        if self.state.is_game_over {
            tracing::warn!("Ignoring skip after game over");
        } else {
            self.state.is_guess_wrong = false;
            self.state.current_guess.clear();
            tracing::debug!("Skipped turn {}", self.state.word_count);
            self.advance_turn();
        }
        self.publish();
    }

    /// Throw away the current round and start a new one. Always allowed.
    pub fn reset_game(&mut self) {
        self.begin_round();
        self.publish();
    }

    fn begin_round(&mut self) {
        self.state = RoundState::fresh();
        self.pick_next_word();
        tracing::info!(
            "New round started: {} words, {} points each",
            self.rules.max_words,
            self.scorer.points_per_word()
        );
    }

    fn advance_turn(&mut self) {
        if self.state.word_count >= self.rules.max_words {
            self.state.is_game_over = true;
            tracing::info!("Round over with score {}", self.state.score);
            return;
        }
        self.state.word_count += 1;
        self.pick_next_word();
    }

    /// Choose an unused word and scramble it.
    ///
    /// Panics if every word in the bank has been used this round; construction
    /// checks make that unreachable from the public commands.
    fn pick_next_word(&mut self) {
        let candidates: Vec<&String> = self
            .bank
            .words()
            .iter()
            .filter(|word| !self.state.used_words.contains(word.as_str()))
            .collect();

        let Some(word) = candidates.choose(&mut self.rng).map(|word| (*word).clone()) else {
            panic!(
                "word bank exhausted: all {} words already used this round",
                self.bank.len()
            );
        };

        self.state.current_scramble = Scrambler::scramble(&word, &mut self.rng);
        tracing::trace!("Turn {} answer is '{}'", self.state.word_count, word);
        self.state.used_words.insert(word.clone());
        self.state.current_word = word;
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.state.snapshot(&self.rules);
        for observer in self.observers.iter_mut() {
            observer.on_state(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn rules(max_words: usize) -> GameRules {
        GameRules {
            max_words,
            score_increase: 20,
        }
    }

    fn engine(words: &[&str], max_words: usize) -> GameEngine {
        GameEngine::with_seed(WordBank::new(words), rules(max_words), 7).unwrap()
    }

    fn answer(engine: &GameEngine) -> String {
        engine.state().current_word.clone()
    }

    fn guess_correctly(engine: &mut GameEngine) {
        let word = answer(engine);
        engine.update_guess(word);
        engine.check_guess();
    }

    fn sorted(word: &str) -> Vec<char> {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn test_new_engine_starts_first_turn() {
        let engine = engine(&["cat", "dog", "sun"], 3);
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.word_count, 1);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.max_words, 3);
        assert!(!snapshot.is_game_over);
        assert!(!snapshot.is_guess_wrong);
        assert!(snapshot.current_guess.is_empty());
        assert_eq!(engine.state().used_words.len(), 1);
        assert!(engine.bank.words().contains(&answer(&engine)));
        assert_eq!(sorted(&snapshot.current_scramble), sorted(&answer(&engine)));
        assert_ne!(snapshot.current_scramble, answer(&engine));
    }

    #[test]
    fn test_empty_word_bank_rejected() {
        let result = GameEngine::new(WordBank::new(Vec::<String>::new()), rules(1));
        assert_eq!(result.err(), Some(EngineError::EmptyWordBank));
    }

    #[test]
    fn test_zero_max_words_rejected() {
        let result = GameEngine::new(WordBank::new(["cat"]), rules(0));
        assert_eq!(result.err(), Some(EngineError::InvalidMaxWords));
    }

    #[test]
    fn test_max_words_larger_than_bank_rejected() {
        let result = GameEngine::new(WordBank::new(["cat", "dog", "cat"]), rules(3));
        assert_eq!(
            result.err(),
            Some(EngineError::NotEnoughWords {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_update_guess_is_verbatim() {
        let mut engine = engine(&["cat", "dog"], 2);
        engine.update_guess("  Hello ");
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.current_guess, "  Hello ");
        assert!(!snapshot.is_guess_wrong);
        assert_eq!(snapshot.word_count, 1);
    }

    #[test]
    fn test_correct_guess_ignores_case_and_whitespace() {
        let mut engine = engine(&["cat", "dog"], 2);
        let word = answer(&engine);
        engine.update_guess(format!("  {}\t", word.to_uppercase()));
        engine.check_guess();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, 20);
        assert_eq!(snapshot.word_count, 2);
        assert!(snapshot.current_guess.is_empty());
        assert_ne!(answer(&engine), word);
    }

    #[test]
    fn test_wrong_guess_keeps_turn() {
        let mut engine = engine(&["cat", "dog"], 2);
        let word = answer(&engine);
        let scramble = engine.snapshot().current_scramble;

        engine.update_guess("zebra");
        engine.check_guess();
        engine.check_guess();

        let snapshot = engine.snapshot();
        assert!(snapshot.is_guess_wrong);
        assert_eq!(snapshot.current_guess, "zebra");
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.word_count, 1);
        assert_eq!(snapshot.current_scramble, scramble);
        assert_eq!(answer(&engine), word);
    }

    #[test]
    fn test_empty_guess_is_wrong() {
        let mut engine = engine(&["cat", "dog"], 2);
        engine.check_guess();
        assert!(engine.snapshot().is_guess_wrong);
        assert_eq!(engine.snapshot().word_count, 1);
    }

    #[test]
    fn test_skip_clears_guess_and_flag() {
        let mut engine = engine(&["cat", "dog", "sun"], 3);
        engine.update_guess("nope");
        engine.check_guess();
        engine.skip_word();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.word_count, 2);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.is_guess_wrong);
        assert!(snapshot.current_guess.is_empty());
    }

    #[test]
    fn test_three_word_round() {
        let mut engine = engine(&["cat", "dog", "sun"], 3);

        guess_correctly(&mut engine);
        assert_eq!(engine.snapshot().score, 20);
        assert_eq!(engine.snapshot().word_count, 2);

        engine.update_guess("wrong");
        engine.check_guess();
        assert!(engine.snapshot().is_guess_wrong);
        assert_eq!(engine.snapshot().score, 20);
        assert_eq!(engine.snapshot().word_count, 2);

        engine.skip_word();
        assert_eq!(engine.snapshot().word_count, 3);
        assert!(!engine.snapshot().is_guess_wrong);

        guess_correctly(&mut engine);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, 40);
        assert_eq!(snapshot.word_count, 3);
        assert!(snapshot.is_game_over);
    }

    #[test]
    fn test_commands_after_game_over_are_ignored() {
        let mut engine = engine(&["cat", "dog"], 2);
        guess_correctly(&mut engine);
        engine.skip_word();
        assert!(engine.snapshot().is_game_over);

        let before = engine.snapshot();
        let word = answer(&engine);

        engine.update_guess(word.clone());
        engine.check_guess();
        engine.skip_word();

        let after = engine.snapshot();
        assert_eq!(after.word_count, 2);
        assert_eq!(after.score, before.score);
        assert!(after.is_game_over);
        assert_eq!(answer(&engine), word);
        assert_eq!(engine.state().used_words.len(), 2);
    }

    #[test]
    fn test_words_never_repeat_within_round() {
        let bank = WordBank::builtin();
        let max_words = bank.len();
        let mut engine = GameEngine::with_seed(bank, rules(max_words), 11).unwrap();

        let mut seen = HashSet::new();
        while !engine.snapshot().is_game_over {
            assert!(seen.insert(answer(&engine)), "word repeated in round");
            engine.skip_word();
        }

        assert_eq!(seen.len(), max_words);
        assert_eq!(engine.state().used_words.len(), max_words);
    }

    #[test]
    fn test_round_ends_after_max_turns() {
        let mut engine = GameEngine::with_seed(WordBank::builtin(), rules(10), 5).unwrap();
        for turn in 1..=10 {
            assert_eq!(engine.snapshot().word_count, turn);
            assert!(!engine.snapshot().is_game_over);
            if turn % 2 == 0 {
                guess_correctly(&mut engine);
            } else {
                engine.skip_word();
            }
        }

        let snapshot = engine.snapshot();
        assert!(snapshot.is_game_over);
        assert_eq!(snapshot.word_count, 10);
        assert_eq!(snapshot.score, 100);
        assert_eq!(engine.state().used_words.len(), 10);
    }

    #[test]
    fn test_scrambles_are_valid_across_round() {
        let bank = WordBank::builtin();
        let max_words = bank.len();
        let mut engine = GameEngine::with_seed(bank, rules(max_words), 3).unwrap();

        while !engine.snapshot().is_game_over {
            let word = answer(&engine);
            let scramble = engine.snapshot().current_scramble;
            assert_eq!(sorted(&scramble), sorted(&word));
            if !Scrambler::is_degenerate(&word) {
                assert_ne!(scramble, word);
            }
            engine.skip_word();
        }
    }

    #[test]
    fn test_degenerate_words_do_not_hang() {
        let mut engine = engine(&["a", "bb", "ccc"], 3);
        for _ in 0..3 {
            let snapshot = engine.snapshot();
            assert_eq!(snapshot.current_scramble, answer(&engine));
            guess_correctly(&mut engine);
        }
        assert!(engine.snapshot().is_game_over);
        assert_eq!(engine.snapshot().score, 60);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut engine = GameEngine::with_seed(WordBank::builtin(), rules(25), 9).unwrap();
        let mut ops = StdRng::seed_from_u64(99);
        let mut last = engine.snapshot().score;

        for _ in 0..200 {
            let was_over = engine.snapshot().is_game_over;
            let correct = match ops.random_range(0..4) {
                0 => {
                    guess_correctly(&mut engine);
                    !was_over
                }
                1 => {
                    engine.update_guess("qqqq");
                    engine.check_guess();
                    false
                }
                2 => {
                    engine.skip_word();
                    false
                }
                _ => {
                    engine.update_guess("typing");
                    false
                }
            };

            let score = engine.snapshot().score;
            if correct {
                assert_eq!(score, last + 20);
            } else {
                assert_eq!(score, last);
            }
            last = score;
        }
    }

    #[test]
    fn test_reset_mid_round() {
        let mut engine = engine(&["cat", "dog", "sun", "map"], 4);
        guess_correctly(&mut engine);
        engine.update_guess("oops");
        engine.check_guess();

        engine.reset_game();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.word_count, 1);
        assert!(!snapshot.is_guess_wrong);
        assert!(!snapshot.is_game_over);
        assert!(snapshot.current_guess.is_empty());
        assert_eq!(engine.state().used_words.len(), 1);
    }

    #[test]
    fn test_reset_after_game_over_starts_new_round() {
        let mut engine = engine(&["cat", "dog"], 2);
        engine.skip_word();
        engine.skip_word();
        assert!(engine.snapshot().is_game_over);

        engine.reset_game();
        assert!(!engine.snapshot().is_game_over);

        guess_correctly(&mut engine);
        assert_eq!(engine.snapshot().score, 20);
        assert_eq!(engine.snapshot().word_count, 2);
    }

    #[test]
    fn test_reset_twice_matches_reset_once() {
        let mut engine = engine(&["cat", "dog", "sun"], 3);
        guess_correctly(&mut engine);

        engine.reset_game();
        let once = engine.snapshot();
        engine.reset_game();
        let twice = engine.snapshot();

        assert_eq!(once.score, twice.score);
        assert_eq!(once.word_count, twice.word_count);
        assert_eq!(once.is_game_over, twice.is_game_over);
        assert_eq!(once.is_guess_wrong, twice.is_guess_wrong);
        assert_eq!(once.current_guess, twice.current_guess);
        assert_eq!(engine.state().used_words.len(), 1);
    }

    #[test]
    fn test_same_seed_same_round() {
        let a = GameEngine::with_seed(WordBank::builtin(), rules(10), 42).unwrap();
        let b = GameEngine::with_seed(WordBank::builtin(), rules(10), 42).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(answer(&a), answer(&b));
    }

    #[test]
    fn test_from_state_keeps_injected_turn() {
        let state = RoundState::in_progress("dog", "gdo", 20, 2);
        let mut engine = GameEngine::from_state(
            WordBank::new(["cat", "dog", "sun"]),
            rules(3),
            state,
            Some(1),
        )
        .unwrap();

        assert_eq!(engine.snapshot().current_scramble, "gdo");
        engine.update_guess("DOG");
        engine.check_guess();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, 40);
        assert_eq!(snapshot.word_count, 3);
        assert_ne!(answer(&engine), "dog");
    }

    #[test]
    fn test_from_state_validates_rules() {
        let result = GameEngine::from_state(
            WordBank::new(["cat"]),
            rules(2),
            RoundState::fresh(),
            None,
        );
        assert!(matches!(result, Err(EngineError::NotEnoughWords { .. })));
    }

    #[test]
    #[should_panic(expected = "word bank exhausted")]
    fn test_picking_from_exhausted_bank_panics() {
        let mut state = RoundState::in_progress("cat", "tca", 0, 1);
        state.used_words.insert("dog".to_string());
        let mut engine =
            GameEngine::from_state(WordBank::new(["cat", "dog"]), rules(2), state, Some(1))
                .unwrap();

        engine.skip_word();
    }

    #[test]
    fn test_observers_see_one_complete_state_per_command() {
        let seen: Rc<RefCell<Vec<GameSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let mut engine = engine(&["cat", "dog"], 2);

        let sink = Rc::clone(&seen);
        engine.subscribe(move |snapshot: &GameSnapshot| sink.borrow_mut().push(snapshot.clone()));

        engine.skip_word();
        guess_correctly(&mut engine);

        let seen = seen.borrow();
        // skip, update_guess, check_guess
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].word_count, 2);
        assert_eq!(seen[0].score, 0);
        assert!(!seen[1].is_game_over);
        assert_eq!(seen[2].score, 20);
        assert!(seen[2].is_game_over);
        assert!(seen[2].current_guess.is_empty());
        assert_eq!(seen[2], engine.snapshot());
    }

    #[test]
    fn test_snapshot_never_reveals_answer_field() {
        let engine = engine(&["kangaroo", "elephant"], 2);
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("current_word"));
        assert!(!object.contains_key("used_words"));
    }
}
