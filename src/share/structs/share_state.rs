use std::collections::VecDeque;
use ahash::AHashMap;
use crate::share::structs::share_entry::ShareEntry;

#[derive(Debug, Default)]
pub struct ShareState {
    pub(crate) entries: AHashMap<String, ShareEntry>,
    /// Codes in insertion order with their insert id; ids that no longer
    /// match the stored entry are stale.
    pub(crate) order: VecDeque<(String, u64)>,
    /// Submitter to last share time (clock milliseconds).
    pub(crate) cooldowns: AHashMap<String, i64>,
    pub(crate) next_insert_id: u64,
}
