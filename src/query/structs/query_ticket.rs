use tokio::task::JoinHandle;
use crate::query::enums::query_state::QueryState;

#[derive(Debug)]
pub struct QueryTicket {
    pub(crate) request_id: u64,
    pub(crate) handle: JoinHandle<QueryState>,
}
