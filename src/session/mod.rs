// Front ends that compose a GameEngine with some kind of UI

pub mod json;
pub mod messages;
pub mod preview;
pub mod terminal;
