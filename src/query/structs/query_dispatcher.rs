use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64};
use ahash::{AHashMap, AHashSet};
use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use crate::aggregation::structs::aggregation_engine::AggregationEngine;
use crate::common::structs::clock::Clock;
use crate::config::structs::configuration::Configuration;
use crate::output::traits::output_boundary::OutputBoundary;
use crate::query::structs::in_flight_set::InFlightSet;
use crate::query::structs::last_result::LastResult;
use crate::share::structs::share_cache::ShareCache;
use crate::statistic::structs::statistic_resolver::StatisticResolver;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct QueryDispatcher {
    pub config: RwLock<Arc<Configuration>>,
    pub(crate) reloading: AtomicBool,
    pub(crate) in_flight: InFlightSet,
    pub(crate) resolver: StatisticResolver,
    pub(crate) engine: Arc<AggregationEngine>,
    pub(crate) output: Arc<dyn OutputBoundary>,
    pub share_cache: Arc<ShareCache>,
    /// Keyed by requester identity.
    pub(crate) last_results: Arc<Mutex<AHashMap<String, LastResult>>>,
    /// Lowercase identities skipped by population scans.
    pub(crate) excluded: RwLock<Arc<AHashSet<String>>>,
    pub(crate) workers: Arc<Semaphore>,
    pub(crate) clock: Arc<Clock>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) runtime: Handle,
    pub(crate) next_request_id: AtomicU64,
}
