use crate::output::structs::rendered_result::RenderedResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareEntry {
    pub code: String,
    pub payload: RenderedResult,
    pub submitter: String,
    /// Clock milliseconds at creation.
    pub created_at_ms: i64,
    pub(crate) insert_id: u64,
}
