use crate::output::structs::rendered_result::RenderedResult;

#[derive(Debug, Clone)]
pub struct LastResult {
    pub payload: RenderedResult,
    /// Clock milliseconds at completion.
    pub created_at_ms: i64,
    pub shared: bool,
}
