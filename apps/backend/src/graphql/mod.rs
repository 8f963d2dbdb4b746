//! GraphQL schema: a relay-style node/connection surface over the game
//! store, built with async-graphql.

pub mod mutation;
pub mod node;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::state::AppState;

pub type TreasureSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the shared game store injected as context data.
pub fn build_schema(state: Arc<AppState>) -> TreasureSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
