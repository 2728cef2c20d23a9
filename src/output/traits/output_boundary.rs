use crate::output::structs::rendered_result::RenderedResult;
use crate::query::enums::destination::Destination;
use crate::query::enums::query_error::QueryError;
use crate::query::enums::query_result::QueryResult;
use crate::query::structs::request::Request;

/// Called from worker tasks; implementations must not block for long.
pub trait OutputBoundary: Send + Sync {
    fn render(&self, result: &QueryResult, request: &Request) -> RenderedResult;

    fn render_failure(&self, error: &QueryError, request: &Request) -> RenderedResult;

    fn deliver(&self, payload: &RenderedResult, destination: &Destination);
}
