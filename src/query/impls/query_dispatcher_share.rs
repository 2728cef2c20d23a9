use log::{debug, info};
use crate::output::structs::rendered_result::RenderedResult;
use crate::query::enums::destination::Destination;
use crate::query::structs::query_dispatcher::QueryDispatcher;
use crate::share::enums::share_error::ShareError;
use crate::stats::enums::stats_event::StatsEvent;

impl QueryDispatcher {
    /// Publishes the submitter's last successful result under a new code.
    pub fn share_last_result(&self, submitter: &str) -> Result<String, ShareError> {
        let result = self.share_last_result_inner(submitter);
        match &result {
            Ok(code) => {
                self.stats.update(StatsEvent::SharesCreated, 1);
                info!("[SHARE] {} shared a result as {}", submitter, code);
            }
            Err(e) => {
                self.stats.update(StatsEvent::SharesRejected, 1);
                debug!("[SHARE] Share by {} rejected: {}", submitter, e);
            }
        }
        result
    }

    fn share_last_result_inner(&self, submitter: &str) -> Result<String, ShareError> {
        if !self.share_cache.is_enabled() {
            return Err(ShareError::Disabled);
        }
        let ttl_ms = self.config.read().share_ttl().as_millis() as i64;

        let mut last_results = self.last_results.lock();
        let last = last_results.get_mut(submitter).ok_or(ShareError::NoResultToShare)?;
        if last.shared {
            return Err(ShareError::AlreadyShared);
        }
        if self.clock.now_ms() - last.created_at_ms > ttl_ms {
            return Err(ShareError::ResultTooOld);
        }
        let code = self.share_cache.share(submitter, last.payload.clone())?;
        last.shared = true;
        Ok(code)
    }

    /// Returns the shared payload and delivers it, to everyone when
    /// `broadcast_on_redeem` is set, otherwise to the requester.
    pub fn redeem_code(&self, code: &str, requester: &str) -> Result<RenderedResult, ShareError> {
        match self.share_cache.redeem(code, requester) {
            Ok(payload) => {
                self.stats.update(StatsEvent::SharesRedeemed, 1);
                let destination = if self.config.read().share.broadcast_on_redeem {
                    Destination::Broadcast
                } else {
                    Destination::Requester(requester.to_string())
                };
                self.output.deliver(&payload, &destination);
                Ok(payload)
            }
            Err(e) => {
                if e == ShareError::Expired {
                    self.stats.update(StatsEvent::SharesExpired, 1);
                }
                self.stats.update(StatsEvent::SharesRejected, 1);
                debug!("[SHARE] Redeem of {} by {} rejected: {}", code, requester, e);
                Err(e)
            }
        }
    }

    /// Drops expired share entries and stale cooldowns.
    pub fn clean_shares(&self) -> usize {
        let removed = self.share_cache.clean_expired();
        self.stats.update(StatsEvent::SharesExpired, removed as i64);
        self.stats.update(StatsEvent::TimestampShareCleanup, chrono::Utc::now().timestamp());
        if removed > 0 {
            info!("[SHARE] Removed {} expired shares, {} remaining", removed, self.share_cache.len());
        }
        removed
    }
}
