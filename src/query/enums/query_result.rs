use serde::{Deserialize, Serialize};
use crate::aggregation::structs::ranked_result::RankedResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Player { name: String, value: i32 },
    Server(i64),
    Top(RankedResult),
}
