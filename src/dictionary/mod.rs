use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;

/// Words compiled into the binary, used when no word list file is configured
static BUILTIN_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    include_str!("words.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Ordered, read-only collection of candidate words for a round.
///
/// Entries are trimmed and unique (compared case-insensitively); the first
/// spelling of a word wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a word bank from any list of words, normalizing entries
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut dropped = 0usize;

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                dropped += 1;
                continue;
            }
            if !seen.insert(word.to_lowercase()) {
                tracing::warn!("Dropping duplicate word '{}' from word bank", word);
                dropped += 1;
                continue;
            }
            kept.push(word.to_string());
        }

        if dropped > 0 {
            tracing::debug!("Skipped {} blank or duplicate word bank entries", dropped);
        }

        Self { words: kept }
    }

    /// The word list shipped with the game
    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS.iter())
    }

    /// Load a word bank from a file, one word per line.
    /// Lines starting with `#` are comments.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let bank = Self::new(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        );

        tracing::info!("Loaded {} words from {}", bank.len(), path.display());

        Ok(bank)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of unique words in the bank
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
