//! GraphQL object types for the treasure search schema.

use std::sync::Arc;

use async_graphql::connection::{query, Connection, Edge};
use async_graphql::{Context, Object, Result, ID};

use crate::game::HidingSpot as HidingSpotRecord;
use crate::graphql::node;
use crate::state::AppState;

/// A treasure search game
pub struct Game;

#[Object]
impl Game {
    /// The ID of an object
    pub async fn id(&self) -> ID {
        node::to_global_id("Game", "1")
    }

    /// Places where treasure might be hidden
    async fn hiding_spots(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<usize, HidingSpot>> {
        let records: Vec<HidingSpotRecord> = {
            let state = ctx.data::<Arc<AppState>>()?;
            let store = state.game.read();
            store.hiding_spots().to_vec()
        };

        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                // Offset cursors over the fixed board, connectionFromArray-style.
                let mut start = after
                    .map(|cursor: usize| cursor.saturating_add(1))
                    .unwrap_or(0);
                let mut end = before.unwrap_or(records.len()).min(records.len());
                start = start.min(end);
                if let Some(first) = first {
                    end = end.min(start + first);
                }
                if let Some(last) = last {
                    start = start.max(end.saturating_sub(last));
                }

                let mut connection = Connection::new(start > 0, end < records.len());
                connection.edges.extend(
                    records[start..end]
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(i, record)| Edge::new(start + i, HidingSpot::new(record))),
                );
                Ok::<_, async_graphql::Error>(connection)
            },
        )
        .await
    }

    /// The number of turns the player has left to find the treasure
    async fn turns_remaining(&self, ctx: &Context<'_>) -> Result<i32> {
        let state = ctx.data::<Arc<AppState>>()?;
        Ok(state.game.read().turns_remaining())
    }
}

/// A place where you might find treasure
pub struct HidingSpot {
    record: HidingSpotRecord,
}

impl HidingSpot {
    pub fn new(record: HidingSpotRecord) -> Self {
        Self { record }
    }
}

#[Object]
impl HidingSpot {
    /// The ID of an object
    pub async fn id(&self) -> ID {
        node::to_global_id("HidingSpot", &self.record.id)
    }

    /// True if this hiding spot has already been checked
    async fn has_been_checked(&self) -> bool {
        self.record.has_been_checked
    }

    /// True if this hiding spot holds treasure; hidden until the spot has
    /// been checked
    async fn has_treasure(&self) -> Option<bool> {
        self.record
            .has_been_checked
            .then_some(self.record.has_treasure)
    }
}
