use std::sync::Arc;
use ahash::AHashSet;
use parking_lot::Mutex;

#[derive(Debug, Clone, Default)]
pub struct InFlightSet {
    pub(crate) keys: Arc<Mutex<AHashSet<String>>>,
}
