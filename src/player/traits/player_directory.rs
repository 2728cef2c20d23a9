use crate::player::enums::directory_error::DirectoryError;
use crate::player::structs::player_profile::PlayerProfile;
use crate::statistic::enums::statistic_kind::StatisticKind;

pub trait PlayerDirectory: Send + Sync {
    /// Every identity that has ever played, in a stable order.
    fn known_identities(&self) -> Vec<String>;

    /// Raw counter for one player.
    ///
    /// `Ok(None)` means the player is known but has no record for this
    /// counter. An identity that never played fails with
    /// `DirectoryError::UnknownIdentity`.
    fn raw_stat_value(&self, identity: &str, kind: StatisticKind, statistic: &str, qualifier: Option<&str>) -> Result<Option<i32>, DirectoryError>;

    fn profile(&self, _identity: &str) -> Option<PlayerProfile> {
        None
    }
}
