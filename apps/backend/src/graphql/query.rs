use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::node::{self, Node};
use crate::graphql::types::{Game, HidingSpot};
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetches an object given its ID
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let Some((type_name, local_id)) = node::from_global_id(&id) else {
            return Ok(None);
        };

        match type_name.as_str() {
            "Game" => Ok(Some(Node::Game(Game))),
            "HidingSpot" => {
                let state = ctx.data::<Arc<AppState>>()?;
                let record = state.game.read().hiding_spot(&local_id).cloned();
                Ok(record.map(|r| Node::HidingSpot(HidingSpot::new(r))))
            }
            _ => Ok(None),
        }
    }

    /// A treasure search game
    async fn game(&self) -> Game {
        Game
    }
}
