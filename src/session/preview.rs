use crate::{
    dictionary::WordBank,
    error::EngineError,
    game::GameEngine,
    models::{GameRules, RoundState},
};

/// An engine frozen mid-round, for showing the screen without playing
pub fn preview_engine() -> Result<GameEngine, EngineError> {
    let mut state = RoundState::in_progress("animal", "nailma", 40, 3);
    state.current_guess = "anim".to_string();

    GameEngine::from_state(WordBank::builtin(), GameRules::default(), state, Some(0))
}
