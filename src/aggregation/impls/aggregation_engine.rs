use std::sync::Arc;
use std::time::Instant;
use log::debug;
use crate::aggregation::structs::aggregation_engine::AggregationEngine;
use crate::aggregation::structs::player_stat_sample::PlayerStatSample;
use crate::aggregation::structs::ranked_result::RankedResult;
use crate::aggregation::structs::scan_context::ScanContext;
use crate::config::structs::configuration::Configuration;
use crate::player::enums::directory_error::DirectoryError;
use crate::player::traits::player_directory::PlayerDirectory;
use crate::query::enums::query_error::QueryError;
use crate::query::enums::query_result::QueryResult;
use crate::query::enums::target_mode::TargetMode;
use crate::query::structs::request::Request;
use crate::statistic::structs::qualifier::Qualifier;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;

impl AggregationEngine {
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> AggregationEngine {
        AggregationEngine { directory }
    }

    pub fn directory(&self) -> Arc<dyn PlayerDirectory> {
        self.directory.clone()
    }

    /// Value of one counter for one player; a missing counter reads as 0.
    pub fn value_for(&self, player: &str, descriptor: &StatisticDescriptor, qualifier: Option<&Qualifier>) -> Result<i32, QueryError> {
        let qualifier = Self::qualifier_name(descriptor, qualifier)?;
        self.read_value(player, descriptor, qualifier)
    }

    /// Sum over every admitted player, widened to 64 bits.
    #[tracing::instrument(level = "debug", skip_all, fields(statistic = %descriptor.name))]
    pub fn server_total(&self, descriptor: &StatisticDescriptor, qualifier: Option<&Qualifier>, context: &ScanContext) -> Result<i64, QueryError> {
        let qualifier = Self::qualifier_name(descriptor, qualifier)?;
        let started = Instant::now();
        let mut total: i64 = 0;
        let mut scanned: usize = 0;
        for identity in self.directory.known_identities() {
            context.check_deadline()?;
            if !context.admits(self.directory.as_ref(), &identity) {
                continue;
            }
            scanned += 1;
            match self.read_value(&identity, descriptor, qualifier) {
                Ok(value) => total = total.saturating_add(value as i64),
                Err(error) => debug!("[SCAN] Skipping {identity}: {error}"),
            }
        }
        debug!("[SCAN] Total of {} over {} players in {:?}", descriptor.name, scanned, started.elapsed());
        Ok(total)
    }

    /// Ranked positive values, at most `min(limit, max_limit)` entries.
    #[tracing::instrument(level = "debug", skip_all, fields(statistic = %descriptor.name))]
    pub fn top_n(&self, descriptor: &StatisticDescriptor, qualifier: Option<&Qualifier>, limit: usize, max_limit: usize, context: &ScanContext) -> Result<RankedResult, QueryError> {
        let qualifier = Self::qualifier_name(descriptor, qualifier)?;
        let limit = limit.min(max_limit);
        let started = Instant::now();
        let mut samples: Vec<PlayerStatSample> = Vec::new();
        for identity in self.directory.known_identities() {
            context.check_deadline()?;
            if !context.admits(self.directory.as_ref(), &identity) {
                continue;
            }
            match self.read_value(&identity, descriptor, qualifier) {
                Ok(value) if value > 0 => samples.push(PlayerStatSample { player: identity, value }),
                Ok(_) => {}
                Err(error) => debug!("[SCAN] Skipping {identity}: {error}"),
            }
        }
        samples.sort_by(|a, b| b.value.cmp(&a.value));
        samples.truncate(limit);
        debug!("[SCAN] Top {} of {} in {:?}", limit, descriptor.name, started.elapsed());
        Ok(RankedResult { limit, entries: samples })
    }

    /// Runs the operation selected by the request's target mode.
    pub fn execute(&self, request: &Request, config: &Configuration, context: &ScanContext) -> Result<QueryResult, QueryError> {
        let descriptor = request.statistic();
        let qualifier = request.qualifier();
        match request.mode() {
            TargetMode::Individual => {
                let player = request.player().ok_or(QueryError::MissingPlayerName)?;
                let value = self.value_for(player, descriptor, qualifier)?;
                Ok(QueryResult::Player { name: player.to_string(), value })
            }
            TargetMode::ServerTotal => {
                Ok(QueryResult::Server(self.server_total(descriptor, qualifier, context)?))
            }
            TargetMode::TopN => {
                let ranked = self.top_n(descriptor, qualifier, request.limit(), config.query.top_list_max_size, context)?;
                Ok(QueryResult::Top(ranked))
            }
        }
    }

    fn qualifier_name<'a>(descriptor: &StatisticDescriptor, qualifier: Option<&'a Qualifier>) -> Result<Option<&'a str>, QueryError> {
        match (descriptor.kind.qualifier_kind(), qualifier) {
            (None, _) => Ok(None),
            (Some(kind), None) => Err(QueryError::QualifierRequired {
                statistic: descriptor.name.clone(),
                kind,
            }),
            (Some(kind), Some(qualifier)) if qualifier.kind != kind => Err(QueryError::QualifierMismatch {
                statistic: descriptor.name.clone(),
                qualifier: qualifier.name.clone(),
                expected: kind,
            }),
            (Some(_), Some(qualifier)) => Ok(Some(qualifier.name.as_str())),
        }
    }

    fn read_value(&self, player: &str, descriptor: &StatisticDescriptor, qualifier: Option<&str>) -> Result<i32, QueryError> {
        match self.directory.raw_stat_value(player, descriptor.kind, &descriptor.name, qualifier) {
            Ok(value) => Ok(value.unwrap_or(0)),
            Err(DirectoryError::UnknownIdentity(identity)) => Err(QueryError::UnknownPlayer(identity)),
            Err(DirectoryError::Backend(message)) => Err(QueryError::UnexpectedFault(message)),
        }
    }
}
