use std::sync::Arc;
use crate::query::structs::in_flight_set::InFlightSet;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Holds an in-flight key until dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    pub(crate) set: InFlightSet,
    pub(crate) key: String,
    /// Gauge decremented on drop, if attached.
    pub(crate) gauge: Option<Arc<StatsAtomics>>,
}
