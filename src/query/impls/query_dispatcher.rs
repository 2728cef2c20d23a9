use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use ahash::{AHashMap, AHashSet};
use chrono::Utc;
use log::{debug, error, warn};
use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use crate::aggregation::structs::aggregation_engine::AggregationEngine;
use crate::aggregation::structs::scan_context::ScanContext;
use crate::common::structs::clock::Clock;
use crate::config::structs::configuration::Configuration;
use crate::output::traits::output_boundary::OutputBoundary;
use crate::player::structs::player_filter::PlayerFilter;
use crate::player::traits::player_directory::PlayerDirectory;
use crate::query::enums::destination::Destination;
use crate::query::enums::query_error::QueryError;
use crate::query::enums::query_result::QueryResult;
use crate::query::enums::query_state::QueryState;
use crate::query::structs::in_flight_guard::InFlightGuard;
use crate::query::structs::in_flight_set::InFlightSet;
use crate::query::structs::last_result::LastResult;
use crate::query::structs::query_dispatcher::QueryDispatcher;
use crate::query::structs::query_ticket::QueryTicket;
use crate::query::structs::raw_query::RawQuery;
use crate::query::structs::request::Request;
use crate::share::structs::share_cache::ShareCache;
use crate::share::traits::permission_check::PermissionCheck;
use crate::statistic::structs::statistic_resolver::StatisticResolver;
use crate::statistic::traits::statistic_vocabulary::StatisticVocabulary;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl QueryDispatcher {
    /// Must be called from within a tokio runtime; workers are spawned on it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn new(
        config: Arc<Configuration>,
        vocabulary: Arc<dyn StatisticVocabulary>,
        directory: Arc<dyn PlayerDirectory>,
        output: Arc<dyn OutputBoundary>,
        permissions: Arc<dyn PermissionCheck>,
        clock: Arc<Clock>,
    ) -> QueryDispatcher
    {
        let share_cache = ShareCache::new(config.share.clone(), clock.clone(), permissions);
        QueryDispatcher {
            reloading: AtomicBool::new(false),
            in_flight: InFlightSet::new(),
            resolver: StatisticResolver::new(vocabulary),
            engine: Arc::new(AggregationEngine::new(directory)),
            output,
            share_cache: Arc::new(share_cache),
            last_results: Arc::new(Mutex::new(AHashMap::new())),
            excluded: RwLock::new(Arc::new(AHashSet::new())),
            workers: Arc::new(Semaphore::new(config.query.max_workers)),
            clock,
            stats: Arc::new(StatsAtomics::new()),
            runtime: Handle::current(),
            next_request_id: AtomicU64::new(0),
            config: RwLock::new(config),
        }
    }

    pub fn config(&self) -> Arc<Configuration> {
        self.config.read().clone()
    }

    pub fn resolver(&self) -> &StatisticResolver {
        &self.resolver
    }

    pub fn engine(&self) -> Arc<AggregationEngine> {
        self.engine.clone()
    }

    pub fn build_request(&self, raw: &RawQuery) -> Result<Request, QueryError> {
        let max_limit = self.config.read().query.top_list_max_size;
        Request::resolve(raw, &self.resolver, max_limit)
    }

    /// Resolves and submits in one go.
    ///
    /// The reload gate is checked before resolution, so a reload rejects
    /// even an invalid query with `ReloadInProgress`.
    pub fn query(&self, raw: &RawQuery) -> Result<QueryTicket, QueryError> {
        if self.is_reloading() {
            return self.reject(StatsEvent::RejectedReload, QueryError::ReloadInProgress);
        }
        match self.build_request(raw) {
            Ok(request) => self.submit_query(request),
            Err(e) => self.reject(StatsEvent::RejectedInvalid, e),
        }
    }

    /// Admits `request` and runs it on a worker.
    ///
    /// Rejections are returned straight away. Once admitted, every outcome
    /// (success, failure, timeout or fault) is rendered and delivered by the
    /// worker. The in-flight slot is released once the result is delivered
    /// and the scan itself has stopped.
    pub fn submit_query(&self, request: Request) -> Result<QueryTicket, QueryError> {
        if self.is_reloading() {
            return self.reject(StatsEvent::RejectedReload, QueryError::ReloadInProgress);
        }

        let snapshot = self.config.read().clone();
        let guard = match self.in_flight.try_acquire(request.requester(), &snapshot.query.single_flight) {
            None => {
                let requester = request.requester().to_string();
                return self.reject(StatsEvent::RejectedRunning, QueryError::RequestAlreadyRunning(requester));
            }
            Some(guard) => guard,
        };

        self.stats.update(StatsEvent::QueriesSubmitted, 1);
        self.stats.update(StatsEvent::QueriesAdmitted, 1);
        let guard = Arc::new(guard.track_in(self.stats.clone()));

        let request_id = self.next_request_id.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = PlayerFilter::new(snapshot.player_filter.clone(), self.excluded.read().clone(), Utc::now().timestamp());
        debug!("[QUERY] Request #{} admitted: {} {} for {}", request_id, request.mode(), request.statistic().name, request.requester());

        let engine = self.engine.clone();
        let output = self.output.clone();
        let workers = self.workers.clone();
        let last_results = self.last_results.clone();
        let clock = self.clock.clone();
        let stats = self.stats.clone();

        let handle = self.runtime.spawn(async move {
            let started = Instant::now();
            let outcome = Self::run_on_worker(engine, workers, request.clone(), snapshot, filter, guard.clone()).await;

            let state = match outcome {
                Ok(result) => {
                    let rendered = output.render(&result, &request);
                    output.deliver(&rendered, request.destination());
                    last_results.lock().insert(request.requester().to_string(), LastResult {
                        payload: rendered,
                        created_at_ms: clock.now_ms(),
                        shared: false,
                    });
                    stats.update(StatsEvent::QueriesCompleted, 1);
                    debug!("[QUERY] Request #{} completed in {:?}", request_id, started.elapsed());
                    QueryState::Completed
                }
                Err(e) => {
                    match &e {
                        QueryError::UnexpectedFault(_) => error!("[QUERY] Request #{} for {} failed: {}", request_id, request.requester(), e),
                        QueryError::AggregationTimeout(_) => {
                            stats.update(StatsEvent::QueriesTimedOut, 1);
                            warn!("[QUERY] Request #{} for {} timed out", request_id, request.requester());
                        }
                        _ => warn!("[QUERY] Request #{} for {} failed: {}", request_id, request.requester(), e),
                    }
                    let rendered = output.render_failure(&e, &request);
                    output.deliver(&rendered, &Destination::Requester(request.requester().to_string()));
                    stats.update(StatsEvent::QueriesFailed, 1);
                    QueryState::Failed
                }
            };

            drop(guard);
            state
        });

        Ok(QueryTicket { request_id, handle })
    }

    /// Waits for a worker permit, then scans on the blocking pool. The
    /// snapshot's timeout covers both the wait and the scan.
    ///
    /// The permit and a share of the in-flight guard move into the blocking
    /// closure, so an abandoned scan keeps its worker slot and its identity
    /// busy until it really stops. A panicking scan becomes `UnexpectedFault`.
    async fn run_on_worker(engine: Arc<AggregationEngine>, workers: Arc<Semaphore>, request: Request, snapshot: Arc<Configuration>, filter: PlayerFilter, guard: Arc<InFlightGuard>) -> Result<QueryResult, QueryError>
    {
        let timeout = snapshot.scan_timeout();
        let context = ScanContext::new(filter, Some(timeout));

        let work = Self::acquire_and_scan(engine, workers, request, snapshot, context, guard);
        match tokio::time::timeout(timeout, work).await {
            Err(_) => Err(QueryError::AggregationTimeout(timeout)),
            Ok(result) => result,
        }
    }

    async fn acquire_and_scan(engine: Arc<AggregationEngine>, workers: Arc<Semaphore>, request: Request, snapshot: Arc<Configuration>, context: ScanContext, guard: Arc<InFlightGuard>) -> Result<QueryResult, QueryError>
    {
        let permit = workers.acquire_owned().await
            .map_err(|e| QueryError::UnexpectedFault(e.to_string()))?;
        let scan = tokio::task::spawn_blocking(move || {
            let result = engine.execute(&request, &snapshot, &context);
            drop(permit);
            drop(guard);
            result
        });
        scan.await.map_err(|e| QueryError::UnexpectedFault(e.to_string()))?
    }

    fn reject(&self, event: StatsEvent, error: QueryError) -> Result<QueryTicket, QueryError> {
        self.stats.update(StatsEvent::QueriesSubmitted, 1);
        self.stats.update(event, 1);
        debug!("[QUERY] Rejected: {}", error);
        Err(error)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_running(&self, identity: &str) -> bool {
        let policy = self.config.read().query.single_flight;
        self.in_flight.contains(identity, &policy)
    }
}
