use serde::{Deserialize, Serialize};

use crate::{game::GameEngine, models::GameSnapshot};

/// Commands sent from a front end to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    UpdateGuess {
        text: String,
    },
    CheckGuess,
    SkipWord,
    ResetGame,
    /// Shorthand for `update_guess` followed by `check_guess`
    Submit {
        text: String,
    },
    /// Ask for the current state without changing it
    Snapshot,
}

impl ClientCommand {
    /// Run the command against the engine
    pub fn apply(self, engine: &mut GameEngine) {
        match self {
            ClientCommand::UpdateGuess { text } => engine.update_guess(text),
            ClientCommand::CheckGuess => engine.check_guess(),
            ClientCommand::SkipWord => engine.skip_word(),
            ClientCommand::ResetGame => engine.reset_game(),
            ClientCommand::Submit { text } => {
                engine.update_guess(text);
                engine.check_guess();
            }
            ClientCommand::Snapshot => {}
        }
    }
}

/// Messages sent from the engine to a front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    State { state: GameSnapshot },
    Error { message: String },
}

impl ServerEvent {
    pub fn state(engine: &GameEngine) -> Self {
        ServerEvent::State {
            state: engine.snapshot(),
        }
    }
}
