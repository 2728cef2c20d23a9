use std::collections::BTreeMap;
use crate::player::structs::player_profile::PlayerProfile;
use crate::player::structs::player_record::PlayerRecord;

impl PlayerRecord {
    pub fn new(name: &str) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            profile: PlayerProfile::default(),
            stats: BTreeMap::new(),
        }
    }

    pub fn stat_key(statistic: &str, qualifier: Option<&str>) -> String {
        match qualifier {
            None => statistic.to_lowercase(),
            Some(qualifier) => format!("{}:{}", statistic.to_lowercase(), qualifier.to_lowercase()),
        }
    }

    pub fn with_profile(mut self, profile: PlayerProfile) -> PlayerRecord {
        self.profile = profile;
        self
    }

    pub fn with_stat(mut self, statistic: &str, qualifier: Option<&str>, value: i32) -> PlayerRecord {
        self.stats.insert(Self::stat_key(statistic, qualifier), value);
        self
    }

    pub fn get_stat(&self, statistic: &str, qualifier: Option<&str>) -> Option<i32> {
        self.stats.get(&Self::stat_key(statistic, qualifier)).copied()
    }

    /// Rewrites counter keys to their lowercase form.
    pub(crate) fn normalized(mut self) -> PlayerRecord {
        self.stats = self.stats
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        self
    }
}
