//! Domain model for the treasure search game.
//!
//! Everything lives in memory for the process lifetime: one singleton
//! [`Game`] and a fixed board of [`HidingSpot`]s, managed by
//! [`store::GameStore`].

pub mod store;

pub use store::GameStore;

/// The singleton game entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Local identifier, always `"1"`.
    pub id: String,
    /// Turns the player has left to find the treasure.
    pub turns_remaining: i32,
}

/// One of the fixed guessable slots on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HidingSpot {
    /// Local identifier, the board index as a string.
    pub id: String,
    /// Set once at initialization, never changed afterwards.
    pub has_treasure: bool,
    pub has_been_checked: bool,
}
