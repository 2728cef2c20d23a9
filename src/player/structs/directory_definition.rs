use serde::{Deserialize, Serialize};
use crate::player::structs::player_record::PlayerRecord;

/// On-disk layout of a directory file; players are scanned in file order.
///
/// ```json
/// { "players": [ { "name": "Ada", "profile": { "whitelisted": true }, "stats": { "mine_block:stone": 42 } } ] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DirectoryDefinition {
    pub players: Vec<PlayerRecord>,
}
