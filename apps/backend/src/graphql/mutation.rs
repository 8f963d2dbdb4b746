use std::sync::Arc;

use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::graphql::node;
use crate::graphql::types::{Game, HidingSpot};
use crate::state::AppState;

/// Input to the check mutation: the global id of the spot to check.
#[derive(InputObject)]
pub struct CheckHidingSpotForTreasureInput {
    pub id: ID,
    pub client_mutation_id: Option<String>,
}

/// Everything a client might want updates about after spending a turn.
pub struct CheckHidingSpotForTreasurePayload {
    local_spot_id: Option<String>,
    client_mutation_id: Option<String>,
}

#[Object]
impl CheckHidingSpotForTreasurePayload {
    /// The spot that was checked, if the input named one
    async fn hiding_spot(&self, ctx: &Context<'_>) -> Result<Option<HidingSpot>> {
        let Some(local_id) = &self.local_spot_id else {
            return Ok(None);
        };
        let state = ctx.data::<Arc<AppState>>()?;
        let record = state.game.read().hiding_spot(local_id).cloned();
        Ok(record.map(HidingSpot::new))
    }

    /// The game, so clients can refetch turnsRemaining
    async fn game(&self) -> Game {
        Game
    }

    async fn client_mutation_id(&self) -> Option<&str> {
        self.client_mutation_id.as_deref()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Spend a turn checking a hiding spot for treasure.
    ///
    /// Never errors: unknown or malformed ids, re-checks, and checks after
    /// the treasure has been found all degrade to no-ops, and the payload
    /// simply reflects the resulting state.
    async fn check_hiding_spot_for_treasure(
        &self,
        ctx: &Context<'_>,
        input: CheckHidingSpotForTreasureInput,
    ) -> Result<CheckHidingSpotForTreasurePayload> {
        let local_spot_id = node::from_global_id(&input.id).map(|(_, id)| id);

        if let Some(id) = &local_spot_id {
            let state = ctx.data::<Arc<AppState>>()?;
            state.game.write().check_hiding_spot(id);
        }

        Ok(CheckHidingSpotForTreasurePayload {
            local_spot_id,
            client_mutation_id: input.client_mutation_id,
        })
    }
}
