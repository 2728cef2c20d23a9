use std::sync::Arc;
use log::info;
use crate::query::structs::query_dispatcher::QueryDispatcher;

impl QueryDispatcher {
    /// Removes a player from population scans. Returns false if already excluded.
    pub fn exclude_player(&self, identity: &str) -> bool {
        let key = identity.trim().to_lowercase();
        let mut lock = self.excluded.write();
        if lock.contains(&key) {
            return false;
        }
        let mut updated = lock.as_ref().clone();
        updated.insert(key);
        *lock = Arc::new(updated);
        info!("[QUERY] {} excluded from statistics", identity);
        true
    }

    pub fn include_player(&self, identity: &str) -> bool {
        let key = identity.trim().to_lowercase();
        let mut lock = self.excluded.write();
        if !lock.contains(&key) {
            return false;
        }
        let mut updated = lock.as_ref().clone();
        updated.remove(&key);
        *lock = Arc::new(updated);
        info!("[QUERY] {} included in statistics again", identity);
        true
    }

    pub fn is_excluded(&self, identity: &str) -> bool {
        self.excluded.read().contains(&identity.trim().to_lowercase())
    }

    /// Sorted lowercase identities.
    pub fn excluded_players(&self) -> Vec<String> {
        let mut players: Vec<String> = self.excluded.read().iter().cloned().collect();
        players.sort();
        players
    }
}
