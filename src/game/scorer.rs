/// Fixed-bonus scoring: every correctly unscrambled word is worth the same
pub struct Scorer {
    points_per_word: u32,
}

impl Scorer {
    pub fn new(points_per_word: u32) -> Self {
        Self { points_per_word }
    }

    /// Score after one more correct answer
    pub fn award(&self, score: u32) -> u32 {
        score.saturating_add(self.points_per_word)
    }

    pub fn points_per_word(&self) -> u32 {
        self.points_per_word
    }
}
