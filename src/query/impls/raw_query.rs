use crate::query::enums::target_mode::TargetMode;
use crate::query::structs::raw_query::RawQuery;

impl RawQuery {
    fn new(requester: &str, mode: TargetMode, statistic: &str) -> RawQuery {
        RawQuery {
            requester: requester.to_string(),
            mode,
            statistic: statistic.to_string(),
            qualifier: None,
            player: None,
            limit: None,
            broadcast: false,
        }
    }

    pub fn player(requester: &str, statistic: &str, player: &str) -> RawQuery {
        let mut query = Self::new(requester, TargetMode::Individual, statistic);
        query.player = Some(player.to_string());
        query
    }

    pub fn server(requester: &str, statistic: &str) -> RawQuery {
        Self::new(requester, TargetMode::ServerTotal, statistic)
    }

    pub fn top(requester: &str, statistic: &str) -> RawQuery {
        Self::new(requester, TargetMode::TopN, statistic)
    }

    pub fn with_qualifier(mut self, qualifier: &str) -> RawQuery {
        self.qualifier = Some(qualifier.to_string());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> RawQuery {
        self.limit = Some(limit);
        self
    }

    pub fn broadcast(mut self) -> RawQuery {
        self.broadcast = true;
        self
    }
}
