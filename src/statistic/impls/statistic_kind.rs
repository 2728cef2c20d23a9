use std::fmt;
use std::fmt::Formatter;
use crate::statistic::enums::qualifier_kind::QualifierKind;
use crate::statistic::enums::statistic_kind::StatisticKind;

impl StatisticKind {
    /// The qualifier kind this statistic needs, `None` for untyped statistics.
    pub fn qualifier_kind(&self) -> Option<QualifierKind> {
        match self {
            StatisticKind::Untyped => None,
            StatisticKind::Block => Some(QualifierKind::Block),
            StatisticKind::Entity => Some(QualifierKind::Entity),
            StatisticKind::Item => Some(QualifierKind::Item),
        }
    }

    pub fn is_untyped(&self) -> bool {
        matches!(self, StatisticKind::Untyped)
    }
}

impl QualifierKind {
    pub const ALL: [QualifierKind; 3] = [QualifierKind::Block, QualifierKind::Entity, QualifierKind::Item];

    pub fn statistic_kind(&self) -> StatisticKind {
        match self {
            QualifierKind::Block => StatisticKind::Block,
            QualifierKind::Entity => StatisticKind::Entity,
            QualifierKind::Item => StatisticKind::Item,
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StatisticKind::Untyped => write!(f, "untyped"),
            StatisticKind::Block => write!(f, "block"),
            StatisticKind::Entity => write!(f, "entity"),
            StatisticKind::Item => write!(f, "item"),
        }
    }
}

impl fmt::Display for QualifierKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.statistic_kind().fmt(f)
    }
}
