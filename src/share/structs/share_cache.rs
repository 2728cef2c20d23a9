use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use crate::common::structs::clock::Clock;
use crate::config::structs::share_config::ShareConfig;
use crate::share::structs::share_state::ShareState;
use crate::share::traits::permission_check::PermissionCheck;

pub struct ShareCache {
    pub(crate) settings: RwLock<ShareConfig>,
    pub(crate) clock: Arc<Clock>,
    pub(crate) state: Mutex<ShareState>,
    pub(crate) permissions: Arc<dyn PermissionCheck>,
}
