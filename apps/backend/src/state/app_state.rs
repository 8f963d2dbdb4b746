use parking_lot::RwLock;

use crate::game::GameStore;

/// Application state containing shared resources
#[derive(Debug)]
pub struct AppState {
    /// The in-memory game store, shared across workers
    pub game: RwLock<GameStore>,
}

impl AppState {
    /// Create a new AppState owning the given store
    pub fn new(store: GameStore) -> Self {
        Self {
            game: RwLock::new(store),
        }
    }
}
