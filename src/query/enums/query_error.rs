use std::time::Duration;
use thiserror::Error;
use crate::statistic::enums::qualifier_kind::QualifierKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown statistic: {0}")]
    UnknownStatistic(String),

    #[error("Unknown sub-statistic '{qualifier}' for {statistic}")]
    UnknownQualifier { statistic: String, qualifier: String },

    #[error("{statistic} needs a {kind} sub-statistic")]
    QualifierRequired { statistic: String, kind: QualifierKind },

    #[error("'{qualifier}' is not a {expected} sub-statistic, as required by {statistic}")]
    QualifierMismatch { statistic: String, qualifier: String, expected: QualifierKind },

    #[error("{statistic} does not take a sub-statistic")]
    QualifierNotAllowed { statistic: String },

    #[error("A player name is required for an individual query")]
    MissingPlayerName,

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("The configuration is being reloaded, try again in a moment")]
    ReloadInProgress,

    #[error("A query for {0} is already running, wait for it to finish")]
    RequestAlreadyRunning(String),

    #[error("The query took longer than {0:?} and was abandoned")]
    AggregationTimeout(Duration),

    #[error("Internal error: {0}")]
    UnexpectedFault(String),
}
