use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Turns per round when nothing else is configured
pub const DEFAULT_MAX_WORDS: usize = 10;
/// Points awarded for each correctly unscrambled word
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Fixed parameters of a round, chosen at engine construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub max_words: usize,
    pub score_increase: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}

/// Mutable state of the active round.
///
/// Owned by the engine. Front ends only ever see a [`GameSnapshot`], which
/// leaves out `current_word` and `used_words`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) used_words: HashSet<String>,
    pub(crate) current_word: String,
    pub(crate) current_scramble: String,
    pub(crate) current_guess: String,
    pub(crate) score: u32,
    /// 1-based index of the current turn
    pub(crate) word_count: usize,
    pub(crate) is_guess_wrong: bool,
    pub(crate) is_game_over: bool,
}

impl RoundState {
    /// A round that has not picked its first word yet
    pub fn fresh() -> Self {
        Self {
            word_count: 1,
            ..Self::default()
        }
    }

    /// Canned mid-round state, for demo screens and tests.
    ///
    /// `word` is recorded as used and becomes the active answer.
    pub fn in_progress(
        word: &str,
        scramble: &str,
        score: u32,
        word_count: usize,
    ) -> Self {
        Self {
            used_words: HashSet::from([word.to_string()]),
            current_word: word.to_string(),
            current_scramble: scramble.to_string(),
            current_guess: String::new(),
            score,
            word_count,
            is_guess_wrong: false,
            is_game_over: false,
        }
    }

    /// Build the read-only view published to front ends
    pub fn snapshot(&self, rules: &GameRules) -> GameSnapshot {
        GameSnapshot {
            current_scramble: self.current_scramble.clone(),
            current_guess: self.current_guess.clone(),
            is_guess_wrong: self.is_guess_wrong,
            score: self.score,
            word_count: self.word_count,
            max_words: rules.max_words,
            is_game_over: self.is_game_over,
        }
    }
}

/// Point-in-time view of a round as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_scramble: String,
    pub current_guess: String,
    pub is_guess_wrong: bool,
    pub score: u32,
    pub word_count: usize,
    pub max_words: usize,
    pub is_game_over: bool,
}
