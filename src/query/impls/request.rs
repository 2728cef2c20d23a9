use crate::query::enums::destination::Destination;
use crate::query::enums::query_error::QueryError;
use crate::query::enums::target_mode::TargetMode;
use crate::query::structs::raw_query::RawQuery;
use crate::query::structs::request::Request;
use crate::statistic::structs::qualifier::Qualifier;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;
use crate::statistic::structs::statistic_resolver::StatisticResolver;

impl Request {
    /// Validates a raw query into a request.
    ///
    /// Fails on an unknown statistic or sub-statistic, a sub-statistic given
    /// to an untyped statistic, or an individual query without a player
    /// name. A top-N limit is capped at `max_limit`; a missing or zero
    /// limit means `max_limit`.
    pub fn resolve(raw: &RawQuery, resolver: &StatisticResolver, max_limit: usize) -> Result<Request, QueryError> {
        let statistic = resolver.resolve(&raw.statistic)?;
        let raw_qualifier = raw.qualifier.as_deref().map(str::trim).filter(|value| !value.is_empty());
        if statistic.kind.is_untyped() && raw_qualifier.is_some() {
            return Err(QueryError::QualifierNotAllowed { statistic: statistic.name });
        }
        let qualifier = resolver.resolve_qualifier(&statistic, raw_qualifier)?;

        let player = match raw.mode {
            TargetMode::Individual => {
                let name = raw.player.as_deref().map(str::trim).filter(|value| !value.is_empty());
                Some(name.ok_or(QueryError::MissingPlayerName)?.to_string())
            }
            TargetMode::ServerTotal | TargetMode::TopN => None,
        };

        let limit = match raw.mode {
            TargetMode::TopN => raw.limit.filter(|limit| *limit > 0).unwrap_or(max_limit).min(max_limit),
            TargetMode::Individual | TargetMode::ServerTotal => 0,
        };

        let destination = if raw.broadcast {
            Destination::Broadcast
        } else {
            Destination::Requester(raw.requester.clone())
        };

        Ok(Request {
            requester: raw.requester.clone(),
            mode: raw.mode,
            statistic,
            qualifier,
            player,
            limit,
            destination,
        })
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    pub fn statistic(&self) -> &StatisticDescriptor {
        &self.statistic
    }

    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Only meaningful for top-N requests.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}
