use std::collections::btree_map::Entry as StatEntry;
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::player::enums::directory_error::DirectoryError;
use crate::player::structs::directory_definition::DirectoryDefinition;
use crate::player::structs::memory_directory::MemoryDirectory;
use crate::player::structs::player_profile::PlayerProfile;
use crate::player::structs::player_record::PlayerRecord;
use crate::player::traits::player_directory::PlayerDirectory;
use crate::statistic::enums::statistic_kind::StatisticKind;

impl MemoryDirectory {
    pub fn new() -> MemoryDirectory {
        MemoryDirectory::default()
    }

    pub fn from_definition(definition: DirectoryDefinition) -> MemoryDirectory {
        let directory = MemoryDirectory::new();
        for record in definition.players {
            directory.insert_player(record);
        }
        directory
    }

    pub fn load(data: &[u8]) -> Result<MemoryDirectory, serde_json::Error> {
        let definition: DirectoryDefinition = serde_json::from_slice(data)?;
        Ok(Self::from_definition(definition))
    }

    pub fn load_file(path: &str) -> Result<MemoryDirectory, CustomError> {
        let data = std::fs::read(path)
            .map_err(|e| CustomError::new(&format!("unable to read directory file {path}: {e}")))?;
        let directory = Self::load(data.as_slice())
            .map_err(|e| CustomError::new(&format!("unable to parse directory file {path}: {e}")))?;
        info!("[DIRECTORY] Loaded {} players from {}", directory.len(), path);
        Ok(directory)
    }

    /// Adds or replaces a player. A replaced player keeps its scan position.
    pub fn insert_player(&self, record: PlayerRecord) -> bool {
        let key = record.name.to_lowercase();
        let mut lock = self.players.write();
        let record = record.normalized();
        match lock.records.insert(key.clone(), record.clone()) {
            None => {
                lock.order.push(record.name);
                true
            }
            Some(_) => {
                if let Some(position) = lock.order.iter().position(|name| name.to_lowercase() == key) {
                    lock.order[position] = record.name;
                }
                false
            }
        }
    }

    /// Sets one counter for a known player. Returns false for unknown players.
    pub fn set_stat(&self, identity: &str, statistic: &str, qualifier: Option<&str>, value: i32) -> bool {
        let mut lock = self.players.write();
        match lock.records.get_mut(&identity.to_lowercase()) {
            None => false,
            Some(record) => {
                record.stats.insert(PlayerRecord::stat_key(statistic, qualifier), value);
                true
            }
        }
    }

    /// Adds `amount` to one counter for a known player, saturating at the bounds.
    pub fn increment_stat(&self, identity: &str, statistic: &str, qualifier: Option<&str>, amount: i32) -> bool {
        let mut lock = self.players.write();
        match lock.records.get_mut(&identity.to_lowercase()) {
            None => false,
            Some(record) => {
                match record.stats.entry(PlayerRecord::stat_key(statistic, qualifier)) {
                    StatEntry::Vacant(v) => {
                        v.insert(amount);
                    }
                    StatEntry::Occupied(mut o) => {
                        let value = o.get().saturating_add(amount);
                        o.insert(value);
                    }
                }
                true
            }
        }
    }

    pub fn set_profile(&self, identity: &str, profile: PlayerProfile) -> bool {
        let mut lock = self.players.write();
        match lock.records.get_mut(&identity.to_lowercase()) {
            None => false,
            Some(record) => {
                record.profile = profile;
                true
            }
        }
    }

    pub fn get_player(&self, identity: &str) -> Option<PlayerRecord> {
        let lock = self.players.read_recursive();
        lock.records.get(&identity.to_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.players.read_recursive().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlayerDirectory for MemoryDirectory {
    fn known_identities(&self) -> Vec<String> {
        self.players.read_recursive().order.clone()
    }

    fn raw_stat_value(&self, identity: &str, _kind: StatisticKind, statistic: &str, qualifier: Option<&str>) -> Result<Option<i32>, DirectoryError> {
        let lock = self.players.read_recursive();
        match lock.records.get(&identity.to_lowercase()) {
            None => Err(DirectoryError::UnknownIdentity(identity.to_string())),
            Some(record) => Ok(record.get_stat(statistic, qualifier)),
        }
    }

    fn profile(&self, identity: &str) -> Option<PlayerProfile> {
        let lock = self.players.read_recursive();
        lock.records.get(&identity.to_lowercase()).map(|record| record.profile.clone())
    }
}
