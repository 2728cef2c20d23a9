use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("You can share again in {} seconds", whole_seconds(.remaining))]
    CooldownActive { remaining: Duration },

    #[error("No shared result exists for that code")]
    NotFound,

    #[error("That shared result has expired")]
    Expired,

    #[error("You are not allowed to view shared results")]
    Forbidden,

    #[error("Sharing is disabled")]
    Disabled,

    #[error("There is no result to share")]
    NoResultToShare,

    #[error("That result has already been shared")]
    AlreadyShared,

    #[error("That result is too old to share")]
    ResultTooOld,
}

fn whole_seconds(duration: &Duration) -> u64 {
    duration.as_millis().div_ceil(1000) as u64
}
