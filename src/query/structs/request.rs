use crate::query::enums::destination::Destination;
use crate::query::enums::target_mode::TargetMode;
use crate::statistic::structs::qualifier::Qualifier;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;

/// Built once through `Request::resolve`, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) requester: String,
    pub(crate) mode: TargetMode,
    pub(crate) statistic: StatisticDescriptor,
    pub(crate) qualifier: Option<Qualifier>,
    pub(crate) player: Option<String>,
    pub(crate) limit: usize,
    pub(crate) destination: Destination,
}
