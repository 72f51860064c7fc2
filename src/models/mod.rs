pub mod game;

pub use game::{
    // Engine-owned round state
    RoundState,
    // Published to front ends
    GameRules, GameSnapshot,
};
