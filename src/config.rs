use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::models::{game::DEFAULT_MAX_WORDS, game::DEFAULT_SCORE_INCREASE, GameRules};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Word list file; the built-in list is used when unset
    pub words_path: Option<PathBuf>,
    pub max_words: usize,
    pub score_increase: u32,
    /// Fixed seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let game = GameConfig {
            words_path: var("UNSCRAMBLE_WORDS_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            max_words: var("UNSCRAMBLE_MAX_WORDS")
                .unwrap_or_else(|| DEFAULT_MAX_WORDS.to_string())
                .parse()
                .context("UNSCRAMBLE_MAX_WORDS must be a number")?,
            score_increase: var("UNSCRAMBLE_SCORE_INCREASE")
                .unwrap_or_else(|| DEFAULT_SCORE_INCREASE.to_string())
                .parse()
                .context("UNSCRAMBLE_SCORE_INCREASE must be a number")?,
            seed: var("UNSCRAMBLE_SEED")
                .map(|seed| seed.parse())
                .transpose()
                .context("UNSCRAMBLE_SEED must be a number")?,
        };

        Ok(Config { game })
    }

    /// Let command line flags take precedence over the environment
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.words {
            self.game.words_path = Some(path.clone());
        }
        if let Some(max_words) = cli.max_words {
            self.game.max_words = max_words;
        }
        if let Some(score_increase) = cli.score_increase {
            self.game.score_increase = score_increase;
        }
        if let Some(seed) = cli.seed {
            self.game.seed = Some(seed);
        }
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            max_words: self.game.max_words,
            score_increase: self.game.score_increase,
        }
    }
}
