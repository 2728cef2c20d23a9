use ahash::AHashMap;
use parking_lot::RwLock;
use crate::player::structs::player_record::PlayerRecord;

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    pub(crate) players: RwLock<MemoryDirectoryState>,
}

#[derive(Debug, Default)]
pub struct MemoryDirectoryState {
    /// Canonical names in registration order.
    pub(crate) order: Vec<String>,
    /// Records keyed by lowercase name.
    pub(crate) records: AHashMap<String, PlayerRecord>,
}
