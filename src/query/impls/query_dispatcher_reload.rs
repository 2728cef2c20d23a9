use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{error, info, warn};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::query::structs::query_dispatcher::QueryDispatcher;
use crate::stats::enums::stats_event::StatsEvent;

impl QueryDispatcher {
    pub fn is_reloading(&self) -> bool {
        self.reloading.load(Ordering::SeqCst)
    }

    /// Closes the admission gate. Returns false if a reload is already running.
    pub fn begin_reload(&self) -> bool {
        let started = self.reloading.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok();
        if started {
            info!("[RELOAD] Admission paused");
        }
        started
    }

    pub fn end_reload(&self) {
        self.reloading.store(false, Ordering::SeqCst);
        info!("[RELOAD] Admission resumed");
    }

    /// Swaps the snapshot used by requests admitted from now on.
    ///
    /// Running workers keep the snapshot they were admitted with. The worker
    /// pool keeps the size it was created with.
    pub fn apply_config(&self, config: Configuration) {
        if config.query.max_workers != self.config.read().query.max_workers {
            warn!("[RELOAD] max_workers only takes effect after a restart");
        }
        self.share_cache.update_settings(config.share.clone());
        *self.config.write() = Arc::new(config);
        self.stats.update(StatsEvent::Reloads, 1);
    }

    /// Reloads and validates `path`, holding the gate for the duration.
    pub fn reload_config(&self, path: &str) -> Result<(), CustomError> {
        if !self.begin_reload() {
            return Err(CustomError::new("a reload is already in progress"));
        }
        let result = Configuration::load_file(path)
            .and_then(|config| config.validate().map(|_| config))
            .map(|config| self.apply_config(config));
        self.end_reload();

        match result {
            Ok(()) => {
                info!("[RELOAD] Configuration reloaded from {}", path);
                Ok(())
            }
            Err(e) => {
                error!("[RELOAD] Keeping the current configuration: {}", e);
                Err(CustomError::new(&format!("unable to reload {path}: {e}")))
            }
        }
    }
}
