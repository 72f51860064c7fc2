pub struct GuessValidator;

impl GuessValidator {
    /// Check a typed guess against the answer.
    /// Surrounding whitespace is ignored and letters compare case-insensitively.
    pub fn matches(guess: &str, answer: &str) -> bool {
        let guess = Self::normalize(guess);
        !guess.is_empty() && guess == Self::normalize(answer)
    }

    fn normalize(text: &str) -> String {
        text.trim().to_lowercase()
    }
}
