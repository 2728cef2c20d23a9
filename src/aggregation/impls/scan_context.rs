use std::time::{Duration, Instant};
use crate::player::structs::player_filter::PlayerFilter;
use crate::player::traits::player_directory::PlayerDirectory;
use crate::aggregation::structs::scan_context::ScanContext;
use crate::query::enums::query_error::QueryError;

impl ScanContext {
    pub fn new(filter: PlayerFilter, timeout: Option<Duration>) -> ScanContext {
        ScanContext {
            deadline: timeout.map(|timeout| (Instant::now() + timeout, timeout)),
            filter,
        }
    }

    /// No deadline, everyone admitted.
    pub fn unbounded() -> ScanContext {
        ScanContext::default()
    }

    pub fn check_deadline(&self) -> Result<(), QueryError> {
        match self.deadline {
            Some((deadline, timeout)) if Instant::now() >= deadline => Err(QueryError::AggregationTimeout(timeout)),
            _ => Ok(()),
        }
    }

    pub fn admits(&self, directory: &dyn PlayerDirectory, identity: &str) -> bool {
        if self.filter.needs_profile() {
            let profile = directory.profile(identity);
            self.filter.admits(identity, profile.as_ref())
        } else {
            self.filter.admits(identity, None)
        }
    }
}
