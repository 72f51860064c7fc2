// Game engine modules

pub mod engine;
pub mod observer;
pub mod scorer;
pub mod scrambler;
pub mod validator;

pub use engine::GameEngine;
pub use observer::StateObserver;
pub use scorer::Scorer;
pub use scrambler::Scrambler;
pub use validator::GuessValidator;
