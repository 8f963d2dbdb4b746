//! In-memory mock database for the treasure search game.
//!
//! The store is deliberately forgiving: unknown identifiers yield an absent
//! result, and checking after the treasure has been found is a silent no-op.
//! Nothing here ever returns an error.

use rand::Rng;

use crate::game::{Game, HidingSpot};

/// Board size when no override is configured.
pub const DEFAULT_SPOT_COUNT: usize = 9;
/// Starting turn budget when no override is configured.
pub const DEFAULT_STARTING_TURNS: i32 = 3;

/// The in-memory game store.
///
/// Exactly one spot holds the treasure, chosen uniformly at random when the
/// store is built. Shared access goes through `AppState`, which wraps the
/// store in a `parking_lot::RwLock`.
#[derive(Debug)]
pub struct GameStore {
    spots: Vec<HidingSpot>,
    turns_remaining: i32,
}

impl GameStore {
    /// Build the default board (nine spots, three turns), hiding the
    /// treasure with the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(
            &mut rand::rng(),
            DEFAULT_SPOT_COUNT,
            DEFAULT_STARTING_TURNS,
        )
    }

    /// Build a board drawing the treasure index from the given RNG.
    ///
    /// Tests seed this with `rand_chacha` for reproducible boards.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, spot_count: usize, starting_turns: i32) -> Self {
        let treasure_index = rng.random_range(0..spot_count);
        Self::with_treasure_at(treasure_index, spot_count, starting_turns)
    }

    /// Build a board with the treasure at a known index.
    pub fn with_treasure_at(treasure_index: usize, spot_count: usize, starting_turns: i32) -> Self {
        let spots = (0..spot_count)
            .map(|i| HidingSpot {
                id: i.to_string(),
                has_treasure: i == treasure_index,
                has_been_checked: false,
            })
            .collect();

        Self {
            spots,
            turns_remaining: starting_turns,
        }
    }

    /// Snapshot of the singleton game.
    pub fn game(&self) -> Game {
        Game {
            id: "1".to_string(),
            turns_remaining: self.turns_remaining,
        }
    }

    /// All spots in board order.
    pub fn hiding_spots(&self) -> &[HidingSpot] {
        &self.spots
    }

    /// Look up one spot; unknown ids yield `None` silently.
    pub fn hiding_spot(&self, id: &str) -> Option<&HidingSpot> {
        self.spots.iter().find(|s| s.id == id)
    }

    pub fn turns_remaining(&self) -> i32 {
        self.turns_remaining
    }

    /// True once the treasure-holding spot has been checked.
    pub fn treasure_found(&self) -> bool {
        self.spots.iter().any(|s| s.has_treasure && s.has_been_checked)
    }

    /// Spend a turn checking a spot.
    ///
    /// A turn is consumed only when `id` names a spot that has not been
    /// checked yet. Unknown ids, already-checked spots, and any check after
    /// the treasure has been found are silent no-ops.
    pub fn check_hiding_spot(&mut self, id: &str) {
        if self.treasure_found() {
            return;
        }
        let Some(spot) = self.spots.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if spot.has_been_checked {
            return;
        }
        spot.has_been_checked = true;
        self.turns_remaining -= 1;
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
