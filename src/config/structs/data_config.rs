use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub vocabulary: String,
    pub directory: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            vocabulary: "vocabulary.json".to_string(),
            directory: "players.json".to_string(),
        }
    }
}
