use log::error;
use crate::query::enums::query_state::QueryState;
use crate::query::structs::query_ticket::QueryTicket;

impl QueryTicket {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the worker; a worker that panicked or was cancelled counts as failed.
    pub async fn wait(self) -> QueryState {
        match self.handle.await {
            Ok(state) => state,
            Err(e) => {
                error!("[QUERY] Request #{} ended abnormally: {}", self.request_id, e);
                QueryState::Failed
            }
        }
    }
}
