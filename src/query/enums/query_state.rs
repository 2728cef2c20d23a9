use serde::{Deserialize, Serialize};

/// `Submitted -> Admitted -> Running -> Completed | Failed`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Submitted,
    Admitted,
    Running,
    Completed,
    Failed,
}
