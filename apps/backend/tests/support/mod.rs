//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use treasure_backend::graphql::node::to_global_id;
use treasure_backend::{build_schema, AppState, GameStore, TreasureSchema};

pub const SPOTS: usize = 9;
pub const TURNS: i32 = 3;

/// Build a schema over a board with the treasure at a known index.
pub fn seeded_schema(treasure_index: usize) -> TreasureSchema {
    let store = GameStore::with_treasure_at(treasure_index, SPOTS, TURNS);
    build_schema(Arc::new(AppState::new(store)))
}

/// Relay global id as the raw string clients send.
pub fn global_id(type_name: &str, id: &str) -> String {
    to_global_id(type_name, id).0
}
