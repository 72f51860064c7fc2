use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

/// How many shuffles to try before giving up on a random arrangement
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 10;

pub struct Scrambler;

impl Scrambler {
    /// Produce a random permutation of `word`'s characters that differs from `word`.
    ///
    /// Words with fewer than two distinct characters have no such arrangement
    /// and are returned unchanged. Otherwise, if every shuffle lands back on the
    /// original, the first differing pair of letters is swapped instead.
    pub fn scramble(word: &str, rng: &mut impl Rng) -> String {
        if Self::is_degenerate(word) {
            tracing::trace!("Word of length {} cannot be scrambled", word.chars().count());
            return word.to_string();
        }

        let mut letters: Vec<char> = word.chars().collect();

        for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
            letters.shuffle(rng);
            let candidate: String = letters.iter().collect();
            if candidate != word {
                return candidate;
            }
        }

        tracing::debug!(
            "No distinct shuffle after {} attempts, swapping letters",
            MAX_SCRAMBLE_ATTEMPTS
        );
        Self::swap_first_distinct(word)
    }

    /// True when no arrangement of the letters differs from the word itself
    pub fn is_degenerate(word: &str) -> bool {
        word.chars().collect::<HashSet<_>>().len() < 2
    }

    fn swap_first_distinct(word: &str) -> String {
        let mut letters: Vec<char> = word.chars().collect();
        if let Some(other) = letters.iter().position(|&c| c != letters[0]) {
            letters.swap(0, other);
        }
        letters.into_iter().collect()
    }
}
