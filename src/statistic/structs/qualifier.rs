use serde::{Deserialize, Serialize};
use crate::statistic::enums::qualifier_kind::QualifierKind;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    pub name: String,
    pub kind: QualifierKind,
}
