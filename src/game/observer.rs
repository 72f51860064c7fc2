use crate::models::GameSnapshot;

/// Receives the engine's state after each command has fully completed
pub trait StateObserver {
    fn on_state(&mut self, snapshot: &GameSnapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameSnapshot),
{
    fn on_state(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}
