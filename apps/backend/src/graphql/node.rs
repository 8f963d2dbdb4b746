//! Relay object identification: opaque global ids and the Node interface.
//!
//! Global ids are `base64("Type:localId")`. Decoding is forgiving; anything
//! malformed yields `None` and resolves to a null node downstream.

use async_graphql::{Interface, ID};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::graphql::types::{Game, HidingSpot};

/// An object with an ID
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The id of the object."))]
pub enum Node {
    Game(Game),
    HidingSpot(HidingSpot),
}

/// Encode a `Type:id` pair as an opaque relay global id.
pub fn to_global_id(type_name: &str, id: &str) -> ID {
    ID(STANDARD.encode(format!("{type_name}:{id}")))
}

/// Decode a relay global id into its type name and local id.
pub fn from_global_id(global_id: &str) -> Option<(String, String)> {
    let bytes = STANDARD.decode(global_id).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (type_name, id) = decoded.split_once(':')?;
    Some((type_name.to_string(), id.to_string()))
}
